//! Block Extractor
//!
//!     Groups classified lines into top-level record blocks. Block
//!     boundaries are a function of level-0 tag values only: a level-0 line
//!     whose tag matches the requested record tag opens a block (closing any
//!     block in progress), any other level-0 line closes the current block,
//!     and every other line belongs to the open block, if any.
//!
//!     Blocks are transient: they exist only for the duration of one parse
//!     call, and nesting inside a block is materialized by the record tree,
//!     not here.

use crate::ged::lexing::RawLine;

/// The contiguous line range belonging to one top-level record.
///
/// Invariant: the first line has level 0 and carries the record tag; all
/// following lines have level >= 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub record_tag: String,
    pub xref: Option<String>,
    pub lines: Vec<RawLine>,
}

/// Extract all blocks whose level-0 tag matches `record_tag`.
///
/// Lines appearing before the first matching record line, and whole records
/// with other tags, are passed over without error.
pub fn extract_blocks(lines: &[RawLine], record_tag: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for line in lines {
        if line.level == 0 {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            if line.tag == record_tag {
                current = Some(Block {
                    record_tag: line.tag.clone(),
                    xref: line.xref.clone(),
                    lines: vec![line.clone()],
                });
            }
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line.clone());
        }
    }

    if let Some(block) = current.take() {
        blocks.push(block);
    }

    blocks
}
