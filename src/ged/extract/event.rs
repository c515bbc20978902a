//! Event Extractor
//!
//!     Extracts one life event from its node: date, place, an optional
//!     coordinate pair from a `MAP` block, the citations directly under the
//!     event, and any media directly under the event (media inside a
//!     citation belongs to the citation extractor). Date, place, and
//!     coordinates pass through the normalizer before they are stored.

use crate::ged::entities::{Coordinates, Event, EventKind, ImportBatch};
use crate::ged::normalize::Normalize;
use crate::ged::tree::{NodeId, RecordTree};

use super::{citation, media};

/// Extract the event rooted at `node`.
pub fn extract_event(
    tree: &RecordTree,
    node: NodeId,
    kind: EventKind,
    ref_id: &str,
    normalizer: &dyn Normalize,
    batch: &mut ImportBatch,
) -> Event {
    let date = tree.first_value(node, "DATE").map(|d| normalizer.date(d));
    let place = tree.first_value(node, "PLAC").map(|p| normalizer.place(p));
    let coordinates = extract_coordinates(tree, node, normalizer);

    let mut citations = Vec::new();
    for sour in tree.children_tagged(node, "SOUR") {
        let cite = citation::extract_citation(tree, sour, ref_id, batch);
        batch.source_citations.push(cite.clone());
        citations.push(cite);
    }

    // Media directly under the event; citation-nested media is handled by
    // the citation extractor.
    for obje in tree.children_tagged(node, "OBJE") {
        batch
            .media_objects
            .push(media::extract_media(tree, obje, ref_id));
    }

    Event {
        kind,
        date,
        place,
        coordinates,
        citations,
    }
}

/// Read a `MAP` block's latitude/longitude pair, anywhere under the event.
///
/// Both halves must be present for coordinates to be recorded at all.
fn extract_coordinates(
    tree: &RecordTree,
    node: NodeId,
    normalizer: &dyn Normalize,
) -> Option<Coordinates> {
    let map = tree
        .descendants(node)
        .find(|id| tree.node(*id).tag == "MAP")?;
    let latitude = tree.first_value(map, "LATI")?;
    let longitude = tree.first_value(map, "LONG")?;
    let (latitude, longitude) = normalizer.coordinates(latitude, longitude);
    Some(Coordinates {
        latitude,
        longitude,
    })
}
