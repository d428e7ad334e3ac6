//! End-to-end spoligotype calling.
//!
//! The caller glues the stages together: a [`SpacerMatcher`] produces
//! counts, the counts threshold into a [`BinarySignature`], the signature
//! encodes to an [`OctalCode`], and the lineage table resolves the SB
//! number. The resulting [`SpoligotypeRecord`] is the plain structured data
//! handed to reporting collaborators.

use serde::Serialize;

use crate::core::signature::{
    BinarySignature, OctalCode, SignatureError, SpacerCounts, DEFAULT_CALL_THRESHOLD,
};
use crate::core::types::SbResolution;
use crate::matching::SpacerMatcher;
use crate::parsing::fastq::ReadFiles;
use crate::reference::{LineageTable, SpacerReference};
use crate::typing::TypingError;

/// The spoligotype result record for one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpoligotypeRecord {
    /// Colon-joined spacer counts in sorted identifier order.
    pub counts: SpacerCounts,
    /// The 43-bit presence/absence signature.
    pub binary: BinarySignature,
    /// The 15-digit octal form.
    pub octal: OctalCode,
    /// The SB designation, or a sentinel when unmatched.
    #[serde(rename = "sb_number")]
    pub sb: SbResolution,
}

/// Calls spoligotypes against a spacer reference and lineage table.
pub struct SpoligotypeCaller<'a> {
    spacers: &'a SpacerReference,
    lineages: &'a LineageTable,
    threshold: u64,
}

impl<'a> SpoligotypeCaller<'a> {
    #[must_use]
    pub fn new(spacers: &'a SpacerReference, lineages: &'a LineageTable) -> Self {
        Self {
            spacers,
            lineages,
            threshold: DEFAULT_CALL_THRESHOLD,
        }
    }

    /// Override the presence threshold (counts strictly greater are called
    /// present).
    #[must_use]
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Type a sample from its raw reads.
    ///
    /// # Errors
    ///
    /// Returns [`TypingError::Match`] when the reads cannot be scanned; a
    /// matcher failure is a hard error for the sample, not retried.
    pub fn type_reads<M: SpacerMatcher>(
        &self,
        matcher: &M,
        reads: &ReadFiles,
    ) -> Result<SpoligotypeRecord, TypingError> {
        let counts = matcher.count_occurrences(self.spacers, reads)?;
        Ok(self.type_counts(counts)?)
    }

    /// Type a sample from precomputed spacer counts.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::WrongCountLen`] unless the counts cover
    /// every reference spacer.
    pub fn type_counts(&self, counts: SpacerCounts) -> Result<SpoligotypeRecord, SignatureError> {
        let binary = BinarySignature::call(&counts, self.threshold)?;
        let octal = binary.to_octal();
        let sb = self.lineages.resolve(&binary.to_string());

        Ok(SpoligotypeRecord {
            counts,
            binary,
            octal,
            sb,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::signature::SPACER_COUNT;
    use crate::core::spacer::Spacer;
    use crate::core::types::SpacerId;
    use crate::reference::lineages::LineageRecord;

    fn reference() -> SpacerReference {
        let spacers = (1..=SPACER_COUNT)
            .map(|i| Spacer::new(format!("spacer{i:02}"), [b'T'; 25]))
            .collect();
        SpacerReference::new(spacers).unwrap()
    }

    fn lineages() -> LineageTable {
        LineageTable::new(vec![LineageRecord {
            id: "1".into(),
            sb: "SB0001".into(),
            binary: format!("11{}", "0".repeat(SPACER_COUNT - 2)),
        }])
    }

    fn counts_with(reference: &SpacerReference, values: &[(&str, u64)]) -> SpacerCounts {
        let mut counts = SpacerCounts::zero_filled(reference.ids());
        for &(id, value) in values {
            counts.add(&SpacerId::new(id), value);
        }
        counts
    }

    #[test]
    fn test_type_counts_resolves_known_lineage() {
        let reference = reference();
        let lineages = lineages();
        let caller = SpoligotypeCaller::new(&reference, &lineages);

        let counts = counts_with(&reference, &[("spacer01", 62), ("spacer02", 48)]);
        let record = caller.type_counts(counts).unwrap();

        assert!(record.binary.to_string().starts_with("11000"));
        assert_eq!(record.octal.to_string(), "600000000000000");
        assert_eq!(record.sb, SbResolution::Known("SB0001".into()));
        assert!(record.counts.colon_joined().starts_with("62:48:0:"));
    }

    #[test]
    fn test_type_counts_all_zeros_sentinel() {
        let reference = reference();
        let lineages = lineages();
        let caller = SpoligotypeCaller::new(&reference, &lineages);

        let record = caller
            .type_counts(SpacerCounts::zero_filled(reference.ids()))
            .unwrap();

        assert!(record.binary.is_all_zeros());
        assert_eq!(record.octal.to_string(), "000000000000000");
        assert_eq!(record.sb, SbResolution::AllZeros);
    }

    #[test]
    fn test_type_counts_unknown_signature_is_not_found() {
        let reference = reference();
        let lineages = lineages();
        let caller = SpoligotypeCaller::new(&reference, &lineages);

        let counts = counts_with(&reference, &[("spacer05", 100)]);
        let record = caller.type_counts(counts).unwrap();
        assert_eq!(record.sb, SbResolution::NotFound);
    }

    #[test]
    fn test_custom_threshold() {
        let reference = reference();
        let lineages = lineages();
        let caller = SpoligotypeCaller::new(&reference, &lineages).with_threshold(10);

        let counts = counts_with(&reference, &[("spacer01", 10)]);
        let record = caller.type_counts(counts).unwrap();
        assert!(record.binary.is_all_zeros());
    }

    #[test]
    fn test_record_serializes_as_plain_strings() {
        let reference = reference();
        let lineages = lineages();
        let caller = SpoligotypeCaller::new(&reference, &lineages);

        let counts = counts_with(&reference, &[("spacer01", 62), ("spacer02", 48)]);
        let record = caller.type_counts(counts).unwrap();

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sb_number"], "SB0001");
        assert_eq!(json["octal"], "600000000000000");
        assert!(json["binary"].as_str().unwrap().len() == SPACER_COUNT);
        assert!(json["counts"].as_str().unwrap().starts_with("62:48:"));
    }
}
