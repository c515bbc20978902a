//! Individual Extractor
//!
//!     Turns one `INDI` record tree into an [`Individual`], pulling its
//!     events, individual-level media, and notes along the way.
//!
//! Name precedence
//!
//!     Explicit `GIVN`/`SURN` sub-values win. When only `NAME` is present,
//!     the conventional surname delimiter `/` recovers the parts:
//!     `Anna /Persson/` has given name before the first slash and surname
//!     between the slashes. The call name is the all-uppercase token inside
//!     the given name, when there is one.

use crate::ged::entities::{EventKind, ImportBatch, Individual, Sex};
use crate::ged::normalize::Normalize;
use crate::ged::tree::RecordTree;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{event, media, note};

/// A whitespace-separated token consisting entirely of uppercase letters.
static UPPERCASE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Lu}+$").expect("static regex"));

/// Extract one individual from its record tree.
///
/// `xref` is the block's cross-reference id; individuals without one get an
/// empty ref and fall back to synthetic keys at merge time. Flattened
/// citations and media are appended to `batch` as a side channel; the
/// returned individual is not yet part of the batch.
pub fn extract_individual(
    tree: &RecordTree,
    xref: Option<&str>,
    normalizer: &dyn Normalize,
    batch: &mut ImportBatch,
) -> Individual {
    let root = tree.root();
    let ref_id = xref.unwrap_or_default().to_string();

    let raw_name = tree.first_value(root, "NAME").map(str::to_string);
    let mut given = tree.first_value(root, "GIVN").map(str::to_string);
    let mut surname = tree.first_value(root, "SURN").map(str::to_string);
    if let Some(name) = raw_name.as_deref() {
        let (split_given, split_surname) = split_name(name);
        given = given.or(split_given);
        surname = surname.or(split_surname);
    }
    let call_name = given.as_deref().and_then(call_name_of);

    let sex = tree
        .first_value(root, "SEX")
        .map(Sex::from_code)
        .unwrap_or_default();

    let mut events = Vec::new();
    for child in tree.node(root).children.clone() {
        if let Some(kind) = EventKind::from_tag(&tree.node(child).tag) {
            events.push(event::extract_event(
                tree, child, kind, &ref_id, normalizer, batch,
            ));
        }
    }

    // Individual-level media: OBJE directly under the record line.
    for obje in tree.children_tagged(root, "OBJE") {
        batch
            .media_objects
            .push(media::extract_media(tree, obje, &ref_id));
    }

    let notes = note::extract_notes(tree, root, &ref_id);
    batch.notes.extend(notes.iter().cloned());

    Individual {
        ref_id,
        name: raw_name.map(|n| strip_surname_delimiters(&n)),
        given,
        surname,
        call_name,
        sex,
        events,
        notes,
    }
}

/// Split `NAME` on the surname delimiter: given before the first `/`,
/// surname between the first pair of `/`.
fn split_name(name: &str) -> (Option<String>, Option<String>) {
    match name.split_once('/') {
        Some((before, after)) => {
            let given = non_empty(before.trim());
            let surname = non_empty(after.split('/').next().unwrap_or("").trim());
            (given, surname)
        }
        None => (non_empty(name.trim()), None),
    }
}

/// The contiguous all-uppercase token of a given name, if any.
fn call_name_of(given: &str) -> Option<String> {
    given
        .split_whitespace()
        .find(|token| UPPERCASE_TOKEN.is_match(token))
        .map(str::to_string)
}

fn strip_surname_delimiters(name: &str) -> String {
    name.replace('/', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
