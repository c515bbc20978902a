//! Token definitions for the GEDCOM format
//!
//! This module defines the tokens produced by the raw GEDCOM lexer. The
//! format is line-oriented, so only five token kinds exist: level numbers,
//! `@...@` cross-reference ids, bare words, intra-line whitespace, and
//! newlines. Everything structural beyond this lives in line classification.
//!
//! The tokens are defined using the logos derive macro; each token carries
//! its byte span in the source so line values can be recovered as raw
//! source slices rather than re-joined token text.

use logos::Logos;

/// All possible tokens in a GEDCOM source
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Cross-reference id, e.g. @I12@ or @S3@. Must outrank Word.
    #[regex(r"@[^@ \t\r\n]+@", priority = 5)]
    XrefId,

    // A run of digits. At line start this is the level; elsewhere it is
    // ordinary value text and the classifier treats it as a word.
    #[regex(r"[0-9]+", priority = 3)]
    Number,

    // Line breaks; both \n and \r\n are accepted.
    #[regex(r"\r?\n")]
    Newline,

    // Intra-line whitespace (never significant beyond separating tokens).
    #[regex(r"[ \t]+")]
    Whitespace,

    // Catch-all for tags and value text.
    #[regex(r"[^ \t\r\n]+", priority = 1)]
    Word,
}

impl Token {
    /// Check if this token is a line break
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }

    /// Check if this token is intra-line whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}
