//! Import Orchestrator
//!
//!     The state machine a host drives to run one import:
//!
//!         Idle -> FileSelected -> Parsing -> MergeReady -> Merged
//!
//!     with `Error` reachable from `FileSelected`/`Parsing` and recoverable
//!     by re-selecting a file. File acquisition is the only suspension
//!     point; it is async relative to the host but never concurrent with
//!     parsing, which starts only once the full text is in memory and runs
//!     synchronously. If acquisition fails the orchestrator moves straight
//!     to `Error` without invoking the parser.
//!
//!     The host owns the persistent [`Dataset`] and passes it to
//!     [`Importer::confirm_merge`]; the orchestrator only reads it and
//!     returns a replacement, so repeated imports accumulate without any
//!     process-wide cache.

use crate::ged::entities::{Dataset, ImportBatch};
use crate::ged::merge::{merge_with, ContentHashKeys, MergeOutcome, SyntheticKeys};
use crate::ged::normalize::{Identity, Normalize};
use crate::ged::parsing::parse_with;
use log::{info, warn};
use std::fmt;
use std::path::PathBuf;

/// Errors that end the current import attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportError {
    /// The selected file could not be read.
    UnreadableFile { path: PathBuf, message: String },
    /// The requested action is not valid in the current stage.
    InvalidTransition {
        from: ImportStage,
        action: &'static str,
    },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::UnreadableFile { path, message } => {
                write!(f, "could not read {}: {}", path.display(), message)
            }
            ImportError::InvalidTransition { from, action } => {
                write!(f, "cannot {} while {}", action, from)
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// Warnings surfaced alongside a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportWarning {
    /// No recognized record produced any entity.
    EmptyDocument,
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportWarning::EmptyDocument => {
                write!(f, "no individuals, citations, media, or notes found")
            }
        }
    }
}

/// The observable stage of the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    Idle,
    FileSelected,
    Parsing,
    MergeReady,
    Merged,
    Error,
}

impl fmt::Display for ImportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportStage::Idle => "idle",
            ImportStage::FileSelected => "file selected",
            ImportStage::Parsing => "parsing",
            ImportStage::MergeReady => "merge ready",
            ImportStage::Merged => "merged",
            ImportStage::Error => "in error",
        };
        f.write_str(name)
    }
}

enum State {
    Idle,
    FileSelected {
        path: PathBuf,
    },
    Parsing,
    MergeReady {
        batch: ImportBatch,
        warnings: Vec<ImportWarning>,
    },
    Merged,
    Error {
        error: ImportError,
    },
}

/// Drives one import at a time for a host application.
pub struct Importer {
    state: State,
    normalizer: Box<dyn Normalize>,
    keys: Box<dyn SyntheticKeys>,
}

impl Importer {
    pub fn new() -> Self {
        Importer {
            state: State::Idle,
            normalizer: Box::new(Identity),
            keys: Box::new(ContentHashKeys),
        }
    }

    /// Replace the identity normalizer.
    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalize>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the content-hash synthetic key generator.
    pub fn with_synthetic_keys(mut self, keys: Box<dyn SyntheticKeys>) -> Self {
        self.keys = keys;
        self
    }

    pub fn stage(&self) -> ImportStage {
        match &self.state {
            State::Idle => ImportStage::Idle,
            State::FileSelected { .. } => ImportStage::FileSelected,
            State::Parsing => ImportStage::Parsing,
            State::MergeReady { .. } => ImportStage::MergeReady,
            State::Merged => ImportStage::Merged,
            State::Error { .. } => ImportStage::Error,
        }
    }

    /// The parsed batch, once the orchestrator is merge-ready.
    pub fn batch(&self) -> Option<&ImportBatch> {
        match &self.state {
            State::MergeReady { batch, .. } => Some(batch),
            _ => None,
        }
    }

    /// Warnings from the last parse.
    pub fn warnings(&self) -> &[ImportWarning] {
        match &self.state {
            State::MergeReady { warnings, .. } => warnings,
            _ => &[],
        }
    }

    /// The terminal error of the current attempt, if any.
    pub fn error(&self) -> Option<&ImportError> {
        match &self.state {
            State::Error { error } => Some(error),
            _ => None,
        }
    }

    /// Select the file to import.
    ///
    /// Valid when idle, re-selecting, recovering from an error, or starting
    /// over after a merge. Not valid mid-parse or with a merge pending.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> Result<(), ImportError> {
        match self.state {
            State::Idle | State::FileSelected { .. } | State::Merged | State::Error { .. } => {
                self.state = State::FileSelected { path: path.into() };
                Ok(())
            }
            _ => Err(self.invalid("select a file")),
        }
    }

    /// Acquire the selected file and parse it.
    ///
    /// On success the orchestrator is merge-ready; on read failure it moves
    /// to `Error` and the parser is never invoked.
    pub async fn run_import(&mut self) -> Result<(), ImportError> {
        let path = match &self.state {
            State::FileSelected { path } => path.clone(),
            _ => return Err(self.invalid("run the import")),
        };

        self.state = State::Parsing;
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) => {
                let error = ImportError::UnreadableFile {
                    path,
                    message: err.to_string(),
                };
                warn!("import failed: {}", error);
                self.state = State::Error {
                    error: error.clone(),
                };
                return Err(error);
            }
        };

        let batch = parse_with(&text, self.normalizer.as_ref());
        let mut warnings = Vec::new();
        if batch.is_empty() {
            warn!("{}: {}", path.display(), ImportWarning::EmptyDocument);
            warnings.push(ImportWarning::EmptyDocument);
        }
        self.state = State::MergeReady { batch, warnings };
        Ok(())
    }

    /// Merge the parsed batch into the host's dataset.
    ///
    /// Returns the replacement dataset and the per-type summary; `existing`
    /// is only read, so an abandoned merge leaves the host untouched.
    pub fn confirm_merge(&mut self, existing: &Dataset) -> Result<MergeOutcome, ImportError> {
        let batch = match &self.state {
            State::MergeReady { batch, .. } => batch,
            _ => return Err(self.invalid("confirm the merge")),
        };

        let outcome = merge_with(existing, batch, self.keys.as_ref());
        info!(
            "merge complete: {} added, {} duplicates",
            outcome.report.total_added(),
            outcome.report.total_skipped()
        );
        self.state = State::Merged;
        Ok(outcome)
    }

    fn invalid(&self, action: &'static str) -> ImportError {
        ImportError::InvalidTransition {
            from: self.stage(),
            action,
        }
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}
