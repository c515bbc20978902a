//! Normalizers
//!
//!     Pluggable transforms applied to raw date, place, and coordinate
//!     strings before they are stored on events. The shipped implementation
//!     is the identity: callers must not assume any output shape beyond
//!     "deterministic function of the input", because locale-aware date
//!     parsing, place reordering, and coordinate conversion are intended to
//!     slot in here without touching the extractors.

/// Capability interface for date/place/coordinate normalization.
///
/// Implementations must be pure: the same input always yields the same
/// output, or parsing itself stops being deterministic.
pub trait Normalize {
    fn date(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn place(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn coordinates(&self, latitude: &str, longitude: &str) -> (String, String) {
        (latitude.to_string(), longitude.to_string())
    }
}

/// The pass-through normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Normalize for Identity {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passes_through() {
        let n = Identity;
        assert_eq!(n.date("12 MAY 1850"), "12 MAY 1850");
        assert_eq!(n.place("Vinslöv, Skåne"), "Vinslöv, Skåne");
        assert_eq!(
            n.coordinates("N56.1", "E13.9"),
            ("N56.1".to_string(), "E13.9".to_string())
        );
    }

    #[test]
    fn test_custom_impl_overrides_only_what_it_needs() {
        struct IsoDates;
        impl Normalize for IsoDates {
            fn date(&self, raw: &str) -> String {
                raw.to_uppercase()
            }
        }
        let n = IsoDates;
        assert_eq!(n.date("12 may 1850"), "12 MAY 1850");
        assert_eq!(n.place("Vinslöv"), "Vinslöv");
    }
}
