//! # ged
//!
//! A parser and import pipeline for the GEDCOM format.
//!
//! GEDCOM is a line-oriented, level-tagged genealogical exchange format: the
//! hierarchy of each record is carried entirely by a leading level integer,
//! with no nesting delimiters. This crate reconstructs that hierarchy,
//! extracts typed entities (individuals, life events, source citations,
//! media objects, notes) and merges them into a host-owned dataset without
//! creating duplicates.
//!
//! The pipeline is strictly layered: raw text -> classified lines -> record
//! blocks -> record trees -> extracted entities -> normalized entities ->
//! merged collections. Parsing is synchronous and pure; the only suspension
//! point is file acquisition in the [import orchestrator](ged::import).
//!
//! For most uses, [`ged::parsing::parse`] and [`ged::merge::merge`] are the
//! entry points; the orchestrator wraps them in a state machine for hosts
//! that drive the flow interactively.

pub mod ged;

pub use crate::ged::entities::{Dataset, ImportBatch};
pub use crate::ged::merge::{merge, MergeOutcome, MergeReport};
pub use crate::ged::parsing::{parse, parse_with};
