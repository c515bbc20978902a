//! Individual entity
//!
//!     An individual record: name fields, sex, life events, and notes. The
//!     `ref_id` is the document-local cross-reference (e.g. `I12`) and is
//!     the dedup key when merging.
//!
//!     Name handling carries a convention from the source material: inside
//!     a multi-part given name, the all-uppercase token marks the name of
//!     common use, stored here as `call_name`.

use super::event::Event;
use super::note::Note;
use serde::{Deserialize, Serialize};

/// Sex as recorded on the individual record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    /// Map the single-letter record code. Anything but `M`/`F` is unknown.
    pub fn from_code(code: &str) -> Self {
        match code {
            "M" => Sex::Male,
            "F" => Sex::Female,
            _ => Sex::Unknown,
        }
    }
}

/// One individual record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Individual {
    #[serde(rename = "ref")]
    pub ref_id: String,
    pub name: Option<String>,
    pub given: Option<String>,
    pub surname: Option<String>,
    pub call_name: Option<String>,
    pub sex: Sex,
    pub events: Vec<Event>,
    pub notes: Vec<Note>,
}
