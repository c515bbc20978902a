//! Note entity
//!
//!     Free text attached to an individual, built by concatenating a base
//!     line with its continuation lines: a continue-with-break line inserts
//!     a `<br>` marker, a continue-concatenate line appends directly. The
//!     assembled html string doubles as the dedup key.

use serde::{Deserialize, Serialize};

/// One note.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Note {
    /// Ref of the owning individual.
    #[serde(rename = "ref")]
    pub ref_id: String,
    pub html: String,
}
