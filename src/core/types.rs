use std::fmt;

use serde::{Serialize, Serializer};

/// Identifier of a spacer in the reference set (e.g. `spacer02`).
///
/// Ordering is lexicographic on the identifier string. This ordering is
/// load-bearing: it fixes the bit order of [`BinarySignature`] and must match
/// the bit order recorded in the lineage database.
///
/// [`BinarySignature`]: crate::core::signature::BinarySignature
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SpacerId(pub String);

impl SpacerId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpacerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of resolving a binary signature against the lineage database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SbResolution {
    /// The signature matched a known lineage.
    Known(String),
    /// No match, and the signature is all zeros. Usually means the spacer
    /// signal was absent or heavily degraded rather than a novel type.
    AllZeros,
    /// No match for a non-zero signature.
    NotFound,
}

impl SbResolution {
    /// True when the signature matched a database entry.
    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for SbResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(sb) => write!(f, "{sb}"),
            Self::AllZeros => {
                write!(f, "spoligo not found, binary all zeros, see spoligo file")
            }
            Self::NotFound => write!(f, "Not Found"),
        }
    }
}

impl Serialize for SbResolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacer_id_ordering_is_lexicographic() {
        let mut ids = vec![
            SpacerId::new("spacer25"),
            SpacerId::new("spacer02"),
            SpacerId::new("spacer10"),
        ];
        ids.sort();
        assert_eq!(ids[0].as_str(), "spacer02");
        assert_eq!(ids[1].as_str(), "spacer10");
        assert_eq!(ids[2].as_str(), "spacer25");
    }

    #[test]
    fn test_sb_resolution_display() {
        assert_eq!(SbResolution::Known("SB0673".into()).to_string(), "SB0673");
        assert_eq!(SbResolution::NotFound.to_string(), "Not Found");
        assert_eq!(
            SbResolution::AllZeros.to_string(),
            "spoligo not found, binary all zeros, see spoligo file"
        );
    }
}
