//! Source-Citation Extractor
//!
//!     Extracts one citation from a `SOUR` node inside an event: the source
//!     ref (cross-reference brackets stripped), page locator, quality
//!     assessment, and an optional nested media object. Nested media is
//!     attached to the citation and also recorded independently in the
//!     batch's media list, tagged with the owning individual's ref.

use crate::ged::entities::{ImportBatch, SourceCitation};
use crate::ged::tree::{NodeId, RecordTree};

use super::media;

/// Extract the citation rooted at `node`.
pub fn extract_citation(
    tree: &RecordTree,
    node: NodeId,
    ref_id: &str,
    batch: &mut ImportBatch,
) -> SourceCitation {
    let source_ref = tree
        .node(node)
        .value
        .as_deref()
        .map(|v| v.trim_matches('@').to_string())
        .filter(|v| !v.is_empty());

    let page = tree.first_value(node, "PAGE").map(str::to_string);
    let quality = tree
        .first_value(node, "QUAY")
        .and_then(|q| q.parse::<u8>().ok())
        .filter(|q| *q <= 3);

    let nested = tree.first_child_tagged(node, "OBJE").map(|obje| {
        let object = media::extract_media(tree, obje, ref_id);
        batch.media_objects.push(object.clone());
        object
    });

    SourceCitation {
        source_ref,
        page,
        quality,
        media: nested,
        linked_to: ref_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ged::blocks::extract_blocks;
    use crate::ged::lexing::classify_lines;
    use rstest::rstest;

    fn citation_of(source: &str) -> (SourceCitation, ImportBatch) {
        let lines = classify_lines(source);
        let blocks = extract_blocks(&lines, "INDI");
        let tree = RecordTree::from_block(&blocks[0]);
        let event = tree.node(tree.root()).children[0];
        let sour = tree
            .first_child_tagged(event, "SOUR")
            .expect("test block has a citation");
        let mut batch = ImportBatch::default();
        let cite = extract_citation(&tree, sour, "I7", &mut batch);
        (cite, batch)
    }

    #[test]
    fn test_source_ref_brackets_stripped() {
        let (cite, _) = citation_of("0 @I1@ INDI\n1 BIRT\n2 SOUR @S12@");
        assert_eq!(cite.source_ref.as_deref(), Some("S12"));
        assert_eq!(cite.linked_to, "I7");
    }

    #[test]
    fn test_missing_source_ref() {
        let (cite, _) = citation_of("0 @I1@ INDI\n1 BIRT\n2 SOUR\n3 PAGE vol 12 p.4");
        assert_eq!(cite.source_ref, None);
        assert_eq!(cite.page.as_deref(), Some("vol 12 p.4"));
    }

    #[rstest]
    #[case("0", Some(0))]
    #[case("3", Some(3))]
    #[case("4", None)]
    #[case("primary", None)]
    fn test_quality_range(#[case] raw: &str, #[case] expected: Option<u8>) {
        let source = format!("0 @I1@ INDI\n1 BIRT\n2 SOUR @S1@\n3 QUAY {raw}");
        let (cite, _) = citation_of(&source);
        assert_eq!(cite.quality, expected);
    }

    #[test]
    fn test_nested_media_recorded_twice() {
        let (cite, batch) = citation_of(
            "0 @I1@ INDI\n\
             1 BIRT\n\
             2 SOUR @S1@\n\
             3 OBJE\n\
             4 FORM jpg\n\
             4 TITL Birth record\n\
             4 FILE ab123.jpg",
        );
        let media = cite.media.expect("nested media");
        assert_eq!(media.form.as_deref(), Some("jpg"));
        assert_eq!(media.title.as_deref(), Some("Birth record"));
        assert_eq!(media.file.as_deref(), Some("ab123.jpg"));
        assert_eq!(media.linked_to, "I7");
        assert_eq!(batch.media_objects, vec![media]);
    }
}
