//! Media Extractor
//!
//!     Extracts one media object from an `OBJE` node: form, title, and file
//!     from the lines nested under the marker. The owning individual's ref
//!     is recorded as `linked_to` so flattened media stays attributable
//!     after the batch leaves its individuals behind.

use crate::ged::entities::MediaObject;
use crate::ged::tree::{NodeId, RecordTree};

/// Extract the media object rooted at `node`.
pub fn extract_media(tree: &RecordTree, node: NodeId, ref_id: &str) -> MediaObject {
    MediaObject {
        form: tree.first_value(node, "FORM").map(str::to_string),
        title: tree.first_value(node, "TITL").map(str::to_string),
        file: tree.first_value(node, "FILE").map(str::to_string),
        linked_to: ref_id.to_string(),
    }
}
