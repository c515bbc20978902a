//! Media object entity
//!
//!     An embedded media reference (photo scan, document image) found under
//!     an individual, an event, or inside a source citation. Dedup key is
//!     the file path.

use serde::{Deserialize, Serialize};

/// One media object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaObject {
    pub form: Option<String>,
    pub title: Option<String>,
    pub file: Option<String>,
    /// Ref of the owning individual.
    pub linked_to: String,
}
