//! Lexer
//!
//!     This module turns raw GEDCOM source into classified lines. GEDCOM has
//!     no nesting delimiters; every physical line is `LEVEL [@XREF@] TAG
//!     [VALUE]` and the hierarchy is implied by the running level integer.
//!     Lexing therefore stops at the line: it produces a flat sequence of
//!     [`RawLine`] values and leaves all structure reconstruction to the
//!     block extractor and the record tree.
//!
//! The Lexing Pipeline
//!
//!     1. Base tokenization using the logos lexer. See
//!        [base_tokenization](base_tokenization). Tokens carry byte spans so
//!        line values can be recovered as raw source slices.
//!
//!     2. Line classification. See [line_classification](line_classification).
//!        Tokens are grouped per physical line and each line is interpreted
//!        as a record boundary (level 0 with optional xref), a tagged
//!        continuation of the current record, or an implicit value
//!        continuation of the previous line.
//!
//! Failure Policy
//!
//!     Lexing fails softly. A line that matches no pattern and has no
//!     previous line to attach to is logged and skipped; the rest of the
//!     document still parses. Nothing in this module returns an error.

pub mod base_tokenization;
pub mod line_classification;

pub use base_tokenization::tokenize;
pub use line_classification::{classify_lines, RawLine};
