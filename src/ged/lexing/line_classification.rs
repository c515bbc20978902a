//! Line Classification
//!
//!     Core classification logic for turning a flat token stream into
//!     [`RawLine`] values. Each physical line is interpreted as one of:
//!
//!         - a record line: `LEVEL @XREF@ TAG` (only at level 0)
//!         - a tagged line: `LEVEL TAG [VALUE]`
//!         - an implicit continuation: anything else non-blank, appended to
//!           the previous line's value (multi-line note bodies encoded
//!           without an explicit continuation tag)
//!
//!     Values are recovered as raw source slices, so internal spacing and
//!     embedded `@...@` references inside values survive untouched.

use crate::ged::token::Token;
use log::warn;
use logos::Span;

/// One classified GEDCOM line.
///
/// `xref` is present only on level-0 record lines bracketed by `@...@`;
/// the brackets are stripped. `value` is everything after the tag.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLine {
    pub level: u32,
    pub tag: String,
    pub xref: Option<String>,
    pub value: Option<String>,
}

impl RawLine {
    /// The line's value, or `""` when absent.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Classify a full source text into lines.
///
/// Tokenizes the source and interprets each physical line. Malformed lines
/// with no previous line to attach to are logged and skipped; this function
/// never fails.
pub fn classify_lines(source: &str) -> Vec<RawLine> {
    let tokens = super::base_tokenization::tokenize(source);
    let mut lines: Vec<RawLine> = Vec::new();

    for group in split_physical_lines(&tokens) {
        match interpret_line(source, group) {
            LineShape::Blank => {}
            LineShape::Line(line) => lines.push(line),
            LineShape::Continuation(text) => match lines.last_mut() {
                Some(previous) => append_continuation(previous, &text),
                None => warn!("skipping malformed line before any record: {:?}", text),
            },
        }
    }

    lines
}

enum LineShape {
    Blank,
    Line(RawLine),
    Continuation(String),
}

/// Split the token stream into per-line groups at newline tokens.
fn split_physical_lines(tokens: &[(Token, Span)]) -> Vec<&[(Token, Span)]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for (index, (token, _)) in tokens.iter().enumerate() {
        if token.is_newline() {
            groups.push(&tokens[start..index]);
            start = index + 1;
        }
    }
    if start < tokens.len() {
        groups.push(&tokens[start..]);
    }
    groups
}

/// Interpret one physical line's tokens.
fn interpret_line(source: &str, group: &[(Token, Span)]) -> LineShape {
    let content: Vec<(Token, Span)> = group
        .iter()
        .filter(|(t, _)| !t.is_whitespace())
        .cloned()
        .collect();
    let Some((first, first_span)) = content.first() else {
        return LineShape::Blank;
    };
    let line_end = group.last().map(|(_, s)| s.end).unwrap_or(first_span.end);

    // Any line not opening with a level number continues the previous value.
    let parsed_level = match first {
        Token::Number => source[first_span.clone()].parse::<u32>().ok(),
        _ => None,
    };
    let Some(level) = parsed_level else {
        let text = source[first_span.start..line_end].trim_end().to_string();
        return LineShape::Continuation(text);
    };

    // A leading `@xref@` is only meaningful on level-0 record lines.
    let mut cursor = 1;
    let mut xref = None;
    if level == 0 {
        if let Some((Token::XrefId, span)) = content.get(cursor) {
            xref = Some(source[span.clone()].trim_matches('@').to_string());
            cursor += 1;
        }
    }

    let Some((_, tag_span)) = content.get(cursor) else {
        // A bare level with nothing after it carries no information.
        return LineShape::Blank;
    };
    let tag = source[tag_span.clone()].to_string();

    let value = content
        .get(cursor + 1)
        .map(|(_, span)| source[span.start..line_end].trim_end().to_string())
        .filter(|v| !v.is_empty());

    LineShape::Line(RawLine {
        level,
        tag,
        xref,
        value,
    })
}

fn append_continuation(previous: &mut RawLine, text: &str) {
    if text.is_empty() {
        return;
    }
    match &mut previous.value {
        Some(value) if !value.is_empty() => {
            value.push(' ');
            value.push_str(text);
        }
        _ => previous.value = Some(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line_with_xref() {
        let lines = classify_lines("0 @I1@ INDI");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, 0);
        assert_eq!(lines[0].tag, "INDI");
        assert_eq!(lines[0].xref.as_deref(), Some("I1"));
        assert_eq!(lines[0].value, None);
    }

    #[test]
    fn test_tagged_line_keeps_value_spacing() {
        let lines = classify_lines("2 DATE 12 MAY 1850");
        assert_eq!(lines[0].level, 2);
        assert_eq!(lines[0].tag, "DATE");
        assert_eq!(lines[0].value.as_deref(), Some("12 MAY 1850"));
    }

    #[test]
    fn test_value_with_embedded_xref() {
        let lines = classify_lines("2 SOUR @S1@");
        assert_eq!(lines[0].tag, "SOUR");
        assert_eq!(lines[0].value.as_deref(), Some("@S1@"));
    }

    #[test]
    fn test_implicit_continuation_joins_previous_value() {
        let lines = classify_lines("1 NOTE first part\nand the rest");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].value.as_deref(), Some("first part and the rest"));
    }

    #[test]
    fn test_orphan_malformed_line_is_skipped() {
        let lines = classify_lines("not a gedcom line\n0 HEAD");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].tag, "HEAD");
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let lines = classify_lines("0 HEAD\r\n\r\n1 GEDC\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].tag, "GEDC");
    }

    #[test]
    fn test_level_zero_without_xref() {
        let lines = classify_lines("0 TRLR");
        assert_eq!(lines[0].level, 0);
        assert_eq!(lines[0].tag, "TRLR");
        assert_eq!(lines[0].xref, None);
    }
}
