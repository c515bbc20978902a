//! Entity model
//!
//!     The structured output of the parse stage. One file per entity,
//!     mirroring the record shapes of the exchange format subset this crate
//!     covers: individuals with their life events, source citations, media
//!     objects, and notes.
//!
//!     Entities are plain owned data with serde derives. They are owned by
//!     the [`ImportBatch`](batch::ImportBatch) until merged, after which
//!     ownership passes to the host's [`Dataset`](batch::Dataset).

pub mod batch;
pub mod citation;
pub mod event;
pub mod individual;
pub mod media;
pub mod note;

pub use batch::{Dataset, ImportBatch};
pub use citation::SourceCitation;
pub use event::{Coordinates, Event, EventKind};
pub use individual::{Individual, Sex};
pub use media::MediaObject;
pub use note::Note;
