//! Batch and dataset containers
//!
//!     [`ImportBatch`] is the parse output: ordered entity sequences, with
//!     citations and media flattened out of their individuals so the merge
//!     engine can dedup them globally. [`Dataset`] is the same shape on the
//!     host side: the persistent, already-merged collections the host owns
//!     and passes back in for each successive import.

use super::citation::SourceCitation;
use super::individual::Individual;
use super::media::MediaObject;
use super::note::Note;
use serde::{Deserialize, Serialize};

/// The output of one parse call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImportBatch {
    pub individuals: Vec<Individual>,
    pub source_citations: Vec<SourceCitation>,
    pub media_objects: Vec<MediaObject>,
    pub notes: Vec<Note>,
}

impl ImportBatch {
    /// True when no entity of any type was extracted.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
            && self.source_citations.is_empty()
            && self.media_objects.is_empty()
            && self.notes.is_empty()
    }
}

/// The host's persistent collections.
///
/// The pipeline never mutates a dataset in place; merging returns a new one
/// so the host sees a single atomic replace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub individuals: Vec<Individual>,
    pub source_citations: Vec<SourceCitation>,
    pub media_objects: Vec<MediaObject>,
    pub notes: Vec<Note>,
}

impl From<ImportBatch> for Dataset {
    fn from(batch: ImportBatch) -> Self {
        Dataset {
            individuals: batch.individuals,
            source_citations: batch.source_citations,
            media_objects: batch.media_objects,
            notes: batch.notes,
        }
    }
}
