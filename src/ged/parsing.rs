//! Parse entry points
//!
//!     Composes the pipeline: classify lines, extract individual blocks,
//!     build each block's record tree, extract entities. The result is a
//!     batch shaped for the merge engine; no side effects, no errors.
//!     Calling [`parse`] twice on identical input yields structurally equal
//!     batches.

use crate::ged::blocks::extract_blocks;
use crate::ged::entities::ImportBatch;
use crate::ged::extract::extract_individual;
use crate::ged::lexing::classify_lines;
use crate::ged::normalize::{Identity, Normalize};
use crate::ged::tree::RecordTree;
use log::debug;

/// Record tag of the individual records this pipeline imports.
pub const INDIVIDUAL_TAG: &str = "INDI";

/// Parse a GEDCOM source with identity normalization.
pub fn parse(source: &str) -> ImportBatch {
    parse_with(source, &Identity)
}

/// Parse a GEDCOM source with a caller-supplied normalizer.
pub fn parse_with(source: &str, normalizer: &dyn Normalize) -> ImportBatch {
    let lines = classify_lines(source);
    let blocks = extract_blocks(&lines, INDIVIDUAL_TAG);

    let mut batch = ImportBatch::default();
    for block in &blocks {
        let tree = RecordTree::from_block(block);
        let individual = extract_individual(&tree, block.xref.as_deref(), normalizer, &mut batch);
        batch.individuals.push(individual);
    }

    debug!(
        "parsed {} individuals, {} citations, {} media, {} notes from {} lines",
        batch.individuals.len(),
        batch.source_citations.len(),
        batch.media_objects.len(),
        batch.notes.len(),
        lines.len()
    );
    batch
}
