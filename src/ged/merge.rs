//! Merge Engine
//!
//!     Merges a freshly parsed batch into the host's existing collections,
//!     keyed by each entity type's natural dedup key: individual ref,
//!     citation source ref (falling back to page), media file, note html.
//!
//! Reconciliation
//!
//!     When an incoming entity's key already exists, the two are reconciled
//!     field by field: the incoming value replaces the existing one only
//!     when it is non-empty, otherwise the existing value is retained. The
//!     same rule covers sequences: an empty incoming event list never wipes
//!     an existing one.
//!
//! Key fallback
//!
//!     Entities without a usable natural key get a synthetic key from a
//!     caller-replaceable [`SyntheticKeys`] generator. The default hashes
//!     the entity's serialized form, so re-importing identical content
//!     dedups stably; there is no positional fallback.
//!
//!     The engine is a pure function: existing collections are cloned, the
//!     merged dataset is returned whole, and the host applies it as one
//!     atomic replace. A failed or abandoned merge leaves the host's
//!     collections untouched because they were never mutated.

use crate::ged::entities::{
    Dataset, ImportBatch, Individual, MediaObject, Note, Sex, SourceCitation,
};
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Synthetic key generation for entities lacking a natural key.
///
/// Implementations must be deterministic functions of the serialized
/// entity; anything positional or time-based breaks merge idempotence.
pub trait SyntheticKeys {
    fn key_for(&self, serialized: &str) -> String;
}

/// Default generator: a hash of the entity's serialized JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentHashKeys;

impl SyntheticKeys for ContentHashKeys {
    fn key_for(&self, serialized: &str) -> String {
        let mut hasher = DefaultHasher::new();
        serialized.hash(&mut hasher);
        format!("synthetic:{:016x}", hasher.finish())
    }
}

/// An entity type the merge engine can dedup.
pub trait Keyed: Clone + Serialize {
    /// The natural dedup key, when the entity carries one.
    fn natural_key(&self) -> Option<String>;

    /// Fold `incoming` into `self`; non-empty incoming fields win.
    fn reconcile(&mut self, incoming: &Self);
}

impl Keyed for Individual {
    fn natural_key(&self) -> Option<String> {
        non_empty(&self.ref_id)
    }

    fn reconcile(&mut self, incoming: &Self) {
        take_string(&mut self.ref_id, &incoming.ref_id);
        take_option(&mut self.name, &incoming.name);
        take_option(&mut self.given, &incoming.given);
        take_option(&mut self.surname, &incoming.surname);
        take_option(&mut self.call_name, &incoming.call_name);
        if incoming.sex != Sex::Unknown {
            self.sex = incoming.sex;
        }
        if !incoming.events.is_empty() {
            self.events = incoming.events.clone();
        }
        if !incoming.notes.is_empty() {
            self.notes = incoming.notes.clone();
        }
    }
}

impl Keyed for SourceCitation {
    fn natural_key(&self) -> Option<String> {
        self.source_ref
            .as_deref()
            .and_then(|v| non_empty(v))
            .or_else(|| self.page.as_deref().and_then(|v| non_empty(v)))
    }

    fn reconcile(&mut self, incoming: &Self) {
        take_option(&mut self.source_ref, &incoming.source_ref);
        take_option(&mut self.page, &incoming.page);
        if incoming.quality.is_some() {
            self.quality = incoming.quality;
        }
        if incoming.media.is_some() {
            self.media = incoming.media.clone();
        }
        take_string(&mut self.linked_to, &incoming.linked_to);
    }
}

impl Keyed for MediaObject {
    fn natural_key(&self) -> Option<String> {
        self.file.as_deref().and_then(non_empty)
    }

    fn reconcile(&mut self, incoming: &Self) {
        take_option(&mut self.form, &incoming.form);
        take_option(&mut self.title, &incoming.title);
        take_option(&mut self.file, &incoming.file);
        take_string(&mut self.linked_to, &incoming.linked_to);
    }
}

impl Keyed for Note {
    fn natural_key(&self) -> Option<String> {
        non_empty(&self.html)
    }

    fn reconcile(&mut self, incoming: &Self) {
        take_string(&mut self.ref_id, &incoming.ref_id);
        take_string(&mut self.html, &incoming.html);
    }
}

/// Added/skipped counts for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub added: usize,
    pub skipped: usize,
}

/// Per-entity-type merge summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeReport {
    pub individuals: Counts,
    pub source_citations: Counts,
    pub media_objects: Counts,
    pub notes: Counts,
}

impl MergeReport {
    pub fn total_added(&self) -> usize {
        self.individuals.added
            + self.source_citations.added
            + self.media_objects.added
            + self.notes.added
    }

    pub fn total_skipped(&self) -> usize {
        self.individuals.skipped
            + self.source_citations.skipped
            + self.media_objects.skipped
            + self.notes.skipped
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |f: &mut fmt::Formatter<'_>, label: &str, counts: &Counts| {
            writeln!(
                f,
                "  {}: {} added, {} merged into existing",
                label, counts.added, counts.skipped
            )
        };
        writeln!(f, "Import merged:")?;
        row(f, "individuals", &self.individuals)?;
        row(f, "source citations", &self.source_citations)?;
        row(f, "media objects", &self.media_objects)?;
        row(f, "notes", &self.notes)
    }
}

/// The merge result: the replacement dataset plus its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub dataset: Dataset,
    pub report: MergeReport,
}

/// Merge a batch into an existing dataset using content-hash key fallback.
pub fn merge(existing: &Dataset, batch: &ImportBatch) -> MergeOutcome {
    merge_with(existing, batch, &ContentHashKeys)
}

/// Merge with a caller-supplied synthetic key generator.
pub fn merge_with(
    existing: &Dataset,
    batch: &ImportBatch,
    keys: &dyn SyntheticKeys,
) -> MergeOutcome {
    let (individuals, individual_counts) =
        merge_collection(&existing.individuals, &batch.individuals, keys);
    let (source_citations, citation_counts) =
        merge_collection(&existing.source_citations, &batch.source_citations, keys);
    let (media_objects, media_counts) =
        merge_collection(&existing.media_objects, &batch.media_objects, keys);
    let (notes, note_counts) = merge_collection(&existing.notes, &batch.notes, keys);

    MergeOutcome {
        dataset: Dataset {
            individuals,
            source_citations,
            media_objects,
            notes,
        },
        report: MergeReport {
            individuals: individual_counts,
            source_citations: citation_counts,
            media_objects: media_counts,
            notes: note_counts,
        },
    }
}

/// Merge one collection, preserving existing order and appending new
/// entities in batch order.
fn merge_collection<T: Keyed>(
    existing: &[T],
    incoming: &[T],
    keys: &dyn SyntheticKeys,
) -> (Vec<T>, Counts) {
    let mut merged: Vec<T> = existing.to_vec();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (position, entity) in merged.iter().enumerate() {
        index.entry(key_of(entity, keys)).or_insert(position);
    }

    let mut counts = Counts::default();
    for entity in incoming {
        let key = key_of(entity, keys);
        match index.get(&key) {
            Some(&position) => {
                merged[position].reconcile(entity);
                counts.skipped += 1;
            }
            None => {
                index.insert(key, merged.len());
                merged.push(entity.clone());
                counts.added += 1;
            }
        }
    }

    (merged, counts)
}

fn key_of<T: Keyed>(entity: &T, keys: &dyn SyntheticKeys) -> String {
    match entity.natural_key() {
        Some(key) => key,
        // Serialization of plain owned structs cannot fail; an empty
        // fallback would only collide with other empty fallbacks.
        None => keys.key_for(&serde_json::to_string(entity).unwrap_or_default()),
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn take_string(existing: &mut String, incoming: &str) {
    if !incoming.is_empty() {
        existing.clear();
        existing.push_str(incoming);
    }
}

fn take_option(existing: &mut Option<String>, incoming: &Option<String>) {
    if let Some(value) = incoming.as_deref() {
        if !value.is_empty() {
            *existing = Some(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ged::entities::Sex;

    fn person(ref_id: &str, surname: Option<&str>) -> Individual {
        Individual {
            ref_id: ref_id.to_string(),
            surname: surname.map(str::to_string),
            ..Individual::default()
        }
    }

    #[test]
    fn test_new_keys_append_in_batch_order() {
        let existing = Dataset::default();
        let batch = ImportBatch {
            individuals: vec![person("I2", None), person("I1", None)],
            ..ImportBatch::default()
        };
        let outcome = merge(&existing, &batch);
        let refs: Vec<_> = outcome
            .dataset
            .individuals
            .iter()
            .map(|i| i.ref_id.as_str())
            .collect();
        assert_eq!(refs, vec!["I2", "I1"]);
        assert_eq!(outcome.report.individuals.added, 2);
    }

    #[test]
    fn test_reconcile_keeps_existing_when_incoming_empty() {
        let existing = Dataset {
            individuals: vec![person("I1", Some("Persson"))],
            ..Dataset::default()
        };
        let batch = ImportBatch {
            individuals: vec![person("I1", None)],
            ..ImportBatch::default()
        };
        let outcome = merge(&existing, &batch);
        assert_eq!(outcome.dataset.individuals.len(), 1);
        assert_eq!(
            outcome.dataset.individuals[0].surname.as_deref(),
            Some("Persson")
        );
        assert_eq!(outcome.report.individuals.skipped, 1);
    }

    #[test]
    fn test_reconcile_overwrites_with_non_empty_incoming() {
        let existing = Dataset {
            individuals: vec![person("I1", Some("Persson"))],
            ..Dataset::default()
        };
        let mut incoming = person("I1", Some("Svensson"));
        incoming.sex = Sex::Female;
        let batch = ImportBatch {
            individuals: vec![incoming],
            ..ImportBatch::default()
        };
        let outcome = merge(&existing, &batch);
        assert_eq!(
            outcome.dataset.individuals[0].surname.as_deref(),
            Some("Svensson")
        );
        assert_eq!(outcome.dataset.individuals[0].sex, Sex::Female);
    }

    #[test]
    fn test_citation_page_fallback_key() {
        let cite = |page: &str, linked_to: &str| SourceCitation {
            page: Some(page.to_string()),
            linked_to: linked_to.to_string(),
            ..SourceCitation::default()
        };
        let batch = ImportBatch {
            source_citations: vec![cite("vol 12 p.4", "I1"), cite("vol 12 p.4", "I2")],
            ..ImportBatch::default()
        };
        let outcome = merge(&Dataset::default(), &batch);
        // Same page text from different individuals collapses to one record.
        assert_eq!(outcome.dataset.source_citations.len(), 1);
        assert_eq!(outcome.report.source_citations.skipped, 1);
    }

    #[test]
    fn test_synthetic_keys_are_stable_across_imports() {
        let anonymous = MediaObject {
            title: Some("untitled scan".to_string()),
            ..MediaObject::default()
        };
        let batch = ImportBatch {
            media_objects: vec![anonymous],
            ..ImportBatch::default()
        };
        let once = merge(&Dataset::default(), &batch);
        let twice = merge(&once.dataset, &batch);
        assert_eq!(twice.dataset.media_objects.len(), 1);
        assert_eq!(twice.report.media_objects.added, 0);
    }

    #[test]
    fn test_merge_does_not_touch_existing() {
        let existing = Dataset {
            individuals: vec![person("I1", Some("Persson"))],
            ..Dataset::default()
        };
        let before = existing.clone();
        let batch = ImportBatch {
            individuals: vec![person("I1", Some("Svensson"))],
            ..ImportBatch::default()
        };
        let _ = merge(&existing, &batch);
        assert_eq!(existing, before);
    }

    #[test]
    fn test_report_display_mentions_each_type() {
        let report = MergeReport {
            individuals: Counts {
                added: 2,
                skipped: 1,
            },
            ..MergeReport::default()
        };
        let text = report.to_string();
        assert!(text.contains("individuals: 2 added"));
        assert!(text.contains("notes: 0 added"));
    }
}
