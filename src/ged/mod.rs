//! Main module for the ged library functionality

pub mod blocks;
pub mod entities;
pub mod extract;
pub mod import;
pub mod lexing;
pub mod merge;
pub mod normalize;
pub mod parsing;
pub mod token;
pub mod tree;
