//! Source citation entity
//!
//!     A reference from an event to a source record, optionally carrying a
//!     page locator, a quality assessment (0-3), and one embedded media
//!     object. Citations are recorded twice during parsing: nested under
//!     their event, and flattened into the batch's citation list tagged
//!     with the owning individual's ref, which is what the merge engine
//!     dedups over.

use super::media::MediaObject;
use serde::{Deserialize, Serialize};

/// One source citation.
///
/// Dedup key: `source_ref`, falling back to `page` when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceCitation {
    pub source_ref: Option<String>,
    pub page: Option<String>,
    pub quality: Option<u8>,
    pub media: Option<MediaObject>,
    /// Ref of the individual whose event cites this source.
    pub linked_to: String,
}
