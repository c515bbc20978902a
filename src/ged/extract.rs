//! Entity Extractors
//!
//!     Per-entity-type extraction logic over a record tree, one concern per
//!     file. The individual extractor drives the others: events nest inside
//!     individuals, citations inside events, media inside events or
//!     citations or at individual level, and notes can hang anywhere in the
//!     record.
//!
//!     Extraction tolerates ragged input by construction: every field read
//!     is an `Option`, unknown tags are passed over, and nothing in this
//!     module returns an error. Flattened copies of citations and media are
//!     accumulated straight into the batch being built, tagged with the
//!     owning individual's ref, which is the shape the merge engine wants.

pub mod citation;
pub mod event;
pub mod individual;
pub mod media;
pub mod note;

pub use individual::extract_individual;
