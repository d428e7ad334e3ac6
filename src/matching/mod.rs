//! Approximate spacer matching against raw reads.
//!
//! Matching is behind the [`SpacerMatcher`] trait so the engine can be
//! swapped (in-process scanning vs. shelling out to an external k-mer
//! tool) without touching the binarization/encoding/lookup chain:
//!
//! - [`FuzzyMatcher`]: the in-process engine; scans every read window
//!   against each spacer and its reverse complement within a substitution
//!   bound
//!
//! Counting is total occurrences across the read set, not per-read
//! presence, and every reference spacer appears in the output even with a
//! zero count.
//!
//! [`FuzzyMatcher`]: fuzzy::FuzzyMatcher

use std::path::PathBuf;

use thiserror::Error;

use crate::core::signature::SpacerCounts;
use crate::parsing::fastq::ReadFiles;
use crate::parsing::ParseError;
use crate::reference::SpacerReference;

pub mod fuzzy;

pub use fuzzy::FuzzyMatcher;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

/// A matching engine: given reads and the spacer reference, produce a count
/// of approximate occurrences per spacer.
///
/// Implementations must cover every reference spacer in the output,
/// zero-filled, and must count both read orientations. A failure is a hard
/// error for the sample; implementations do not retry.
pub trait SpacerMatcher {
    fn count_occurrences(
        &self,
        spacers: &SpacerReference,
        reads: &ReadFiles,
    ) -> Result<SpacerCounts, MatchError>;
}
