//! Base tokenization implementation for the GEDCOM lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.
//!
//! Line classification operates on the token stream produced by this
//! function, not on the source directly; the spans are kept so values can
//! be sliced out of the source untouched.

use crate::ged::token::Token;
use logos::Logos;

/// Tokenize source text with location information
///
/// Performs raw tokenization using the logos lexer, returning tokens paired
/// with their byte spans. Unlexable bytes (e.g. a bare carriage return) are
/// dropped; GEDCOM tolerates them and classification never needs them.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
