//! Shared verified GEDCOM samples for integration tests
//!
//! All suites pull their source text from here instead of scattering
//! ad-hoc strings; when the covered tag subset changes there is one place
//! to review.

/// Two individuals from the same parish, sharing a source record:
/// a full-featured first person (name parts, coordinates, cited birth with
/// nested media, a continued note, a portrait) and a sparser second one.
pub const SAMPLE_FAMILY: &str = "0 HEAD\n\
1 SOUR test\n\
0 @I1@ INDI\n\
1 NAME Anna Maria /Persson/\n\
2 GIVN ANNA Maria\n\
2 SURN Persson\n\
1 SEX F\n\
1 BIRT\n\
2 DATE 12 MAY 1850\n\
2 PLAC Vinslöv\n\
3 MAP\n\
4 LATI N56.1014\n\
4 LONG E13.9107\n\
2 SOUR @S1@\n\
3 PAGE vol 2 p.14\n\
3 QUAY 3\n\
3 OBJE\n\
4 FORM jpg\n\
4 TITL Birth record\n\
4 FILE ad_1850_b14.jpg\n\
1 NOTE Moved to Malmö\n\
2 CONT in 1872\n\
2 CONC , stayed two years\n\
1 OBJE\n\
2 FORM jpg\n\
2 FILE portrait.jpg\n\
0 @I2@ INDI\n\
1 NAME Karl /Persson/\n\
1 SEX M\n\
1 DEAT\n\
2 DATE 3 JAN 1901\n\
2 PLAC Vinslöv\n\
2 SOUR @S1@\n\
3 PAGE vol 9 p.2\n\
1 OCCU Farmer\n\
0 @S1@ SOUR\n\
1 TITL Vinslöv parish records\n\
0 TRLR\n";

/// A document with recognized records but nothing extractable.
pub const HEADER_ONLY: &str = "0 HEAD\n1 SOUR test\n0 TRLR\n";
