//! Event entity
//!
//!     A life event attached to an individual: birth, christening, death,
//!     burial, residence, or occupation. Date, place, and coordinates are
//!     stored as normalized strings (identity-normalized by default, see
//!     the [normalize](crate::ged::normalize) module); citations nest under
//!     the event they support.

use super::citation::SourceCitation;
use serde::{Deserialize, Serialize};

/// The recognized event record tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Birth,
    Christening,
    Death,
    Burial,
    Residence,
    Occupation,
}

impl EventKind {
    /// All recognized kinds, in the order they are scanned.
    pub const ALL: [EventKind; 6] = [
        EventKind::Birth,
        EventKind::Christening,
        EventKind::Death,
        EventKind::Burial,
        EventKind::Residence,
        EventKind::Occupation,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BIRT" => Some(EventKind::Birth),
            "CHR" => Some(EventKind::Christening),
            "DEAT" => Some(EventKind::Death),
            "BURI" => Some(EventKind::Burial),
            "RESI" => Some(EventKind::Residence),
            "OCCU" => Some(EventKind::Occupation),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            EventKind::Birth => "BIRT",
            EventKind::Christening => "CHR",
            EventKind::Death => "DEAT",
            EventKind::Burial => "BURI",
            EventKind::Residence => "RESI",
            EventKind::Occupation => "OCCU",
        }
    }
}

/// A latitude/longitude pair, kept as the raw strings from the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

/// One life event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub date: Option<String>,
    pub place: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub citations: Vec<SourceCitation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("BIRT", EventKind::Birth)]
    #[case("CHR", EventKind::Christening)]
    #[case("DEAT", EventKind::Death)]
    #[case("BURI", EventKind::Burial)]
    #[case("RESI", EventKind::Residence)]
    #[case("OCCU", EventKind::Occupation)]
    fn test_tag_round_trip(#[case] tag: &str, #[case] kind: EventKind) {
        assert_eq!(EventKind::from_tag(tag), Some(kind));
        assert_eq!(kind.tag(), tag);
    }

    #[test]
    fn test_unrecognized_tag() {
        assert_eq!(EventKind::from_tag("MARR"), None);
        assert_eq!(EventKind::from_tag("birt"), None);
    }
}
