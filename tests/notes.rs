//! Integration tests for note assembly

mod common;

use common::SAMPLE_FAMILY;
use ged::parse;

#[test]
fn test_break_and_concatenate_markers() {
    let batch = parse(SAMPLE_FAMILY);
    assert_eq!(batch.notes.len(), 1);
    // One break before the CONT segment, none before the CONC segment.
    assert_eq!(
        batch.notes[0].html,
        "Moved to Malmö<br>in 1872, stayed two years"
    );
    assert_eq!(batch.notes[0].ref_id, "I1");
}

#[test]
fn test_two_breaks_one_concatenation() {
    let source = "0 @I1@ INDI\n\
        1 NOTE base\n\
        2 CONT second line\n\
        2 CONT third line\n\
        2 CONC tail\n";
    let batch = parse(source);
    // Break markers only at the two designated points.
    assert_eq!(
        batch.notes[0].html,
        "base<br>second line<br>third linetail"
    );
}

#[test]
fn test_notes_mirrored_on_individual() {
    let batch = parse(SAMPLE_FAMILY);
    let anna = &batch.individuals[0];
    assert_eq!(anna.notes, batch.notes);
}

#[test]
fn test_transcript_note_from_citation_data() {
    let source = "0 @I4@ INDI\n\
        1 BIRT\n\
        2 SOUR @S1@\n\
        3 DATA\n\
        4 TEXT Född den 12 maj\n\
        4 CONT hemma i byn\n";
    let batch = parse(source);
    assert_eq!(batch.notes.len(), 1);
    assert_eq!(batch.notes[0].html, "Född den 12 maj<br>hemma i byn");
    assert_eq!(batch.notes[0].ref_id, "I4");
}
