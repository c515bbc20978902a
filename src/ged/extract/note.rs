//! Note Extractor
//!
//!     Builds notes from two trigger shapes:
//!
//!         - a `NOTE` node: its value is the base text, `CONT` children
//!           append after a `<br>` break marker, `CONC` children append
//!           with no separator
//!         - a `DATA` node: `TEXT` children start/extend the text, `CONT`
//!           children append after a break (source transcripts)
//!
//!     Continuation scanning stops at the first child that is neither
//!     continuation kind. One note per trigger; notes that end up empty are
//!     dropped rather than recorded as blanks.

use crate::ged::entities::Note;
use crate::ged::tree::{NodeId, RecordTree};

/// Collect every note in the record, in document order.
///
/// The whole subtree is scanned, so notes under events or citations (the
/// `DATA`/`TEXT` transcript convention) are picked up along with top-level
/// ones. `ref_id` is the owning individual.
pub fn extract_notes(tree: &RecordTree, root: NodeId, ref_id: &str) -> Vec<Note> {
    let mut notes = Vec::new();
    for id in tree.descendants(root) {
        let html = match tree.node(id).tag.as_str() {
            "NOTE" => Some(assemble_note(tree, id)),
            "DATA" => Some(assemble_transcript(tree, id)),
            _ => None,
        };
        if let Some(html) = html.filter(|h| !h.is_empty()) {
            notes.push(Note {
                ref_id: ref_id.to_string(),
                html,
            });
        }
    }
    notes
}

fn assemble_note(tree: &RecordTree, node: NodeId) -> String {
    let mut html = tree.node(node).value_str().to_string();
    for child in continuations(tree, node, &["CONT", "CONC"]) {
        let part = tree.node(child);
        if part.tag == "CONT" {
            html.push_str("<br>");
        }
        html.push_str(part.value_str());
    }
    html
}

fn assemble_transcript(tree: &RecordTree, node: NodeId) -> String {
    let mut html = String::new();
    for child in continuations(tree, node, &["TEXT", "CONT"]) {
        let part = tree.node(child);
        if part.tag == "CONT" {
            html.push_str("<br>");
        }
        html.push_str(part.value_str());
    }
    html
}

/// Children of `node` up to the first non-continuation tag.
fn continuations<'a>(
    tree: &'a RecordTree,
    node: NodeId,
    kinds: &'a [&str],
) -> impl Iterator<Item = NodeId> + 'a {
    tree.node(node)
        .children
        .iter()
        .copied()
        .take_while(move |child| kinds.contains(&tree.node(*child).tag.as_str()))
}
