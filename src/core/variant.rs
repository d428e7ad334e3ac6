//! Variant call records and the filter that admits them into the
//! defining-SNP call sets.
//!
//! Field access is explicit: anything a VCF producer can omit or mangle is
//! an `Option` here, and the filter names the reason a record was excluded
//! instead of suppressing errors around field access.

use std::collections::HashSet;

use tracing::debug;

/// One called variant taken from a VCF record.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantCall {
    pub chrom: String,
    pub position: u64,
    /// Reference allele. A length other than 1 marks an indel.
    pub reference: String,
    /// First alternate allele; `None` for a no-call (`.`).
    pub alternate: Option<String>,
    /// Site quality; `None` when the QUAL column is missing.
    pub quality: Option<f64>,
    /// First value of the INFO `AC` field.
    pub allele_count: Option<i64>,
    /// INFO `MQ`, unwrapped to a scalar when the producing tool emits a
    /// list (freebayes does; GATK writes a plain float).
    pub mapping_quality: Option<f64>,
}

impl VariantCall {
    /// Absolute position key, `chrom:pos`, matching the defining-SNP table.
    #[must_use]
    pub fn absolute_position(&self) -> String {
        format!("{}:{}", self.chrom, self.position)
    }
}

/// Why a record was excluded from both call sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// ALT column was a no-call.
    NoAltAllele,
    /// INFO `AC` field absent or unparseable.
    MissingAlleleCount,
    /// `AC` present but neither 1 nor 2.
    AlleleCount,
    /// Reference allele longer than one base (indel, not a SNP).
    NotSnp,
    /// QUAL at or below the threshold; a missing QUAL reads as zero.
    LowQuality,
    /// INFO `MQ` field absent.
    MissingMappingQuality,
    /// `MQ` at or below the threshold.
    LowMappingQuality,
}

/// Classification of one record against the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallClass {
    /// Passed every gate with `AC == 2`.
    Homozygous,
    /// Passed every gate with `AC == 1`; a heterozygous-like signal that
    /// flags a potential mixed infection.
    Mixed,
    Rejected(Rejection),
}

/// Quality gates for accepting a call. Both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallFilter {
    pub min_quality: f64,
    pub min_mapping_quality: f64,
}

impl Default for CallFilter {
    fn default() -> Self {
        Self {
            min_quality: 150.0,
            min_mapping_quality: 56.0,
        }
    }
}

impl CallFilter {
    #[must_use]
    pub fn classify(&self, call: &VariantCall) -> CallClass {
        use CallClass::Rejected;

        if call.alternate.is_none() {
            return Rejected(Rejection::NoAltAllele);
        }
        let Some(allele_count) = call.allele_count else {
            return Rejected(Rejection::MissingAlleleCount);
        };
        if call.reference.len() != 1 {
            return Rejected(Rejection::NotSnp);
        }
        if call.quality.unwrap_or(0.0) <= self.min_quality {
            return Rejected(Rejection::LowQuality);
        }
        let Some(mapping_quality) = call.mapping_quality else {
            return Rejected(Rejection::MissingMappingQuality);
        };
        if mapping_quality <= self.min_mapping_quality {
            return Rejected(Rejection::LowMappingQuality);
        }

        match allele_count {
            2 => CallClass::Homozygous,
            1 => CallClass::Mixed,
            _ => Rejected(Rejection::AlleleCount),
        }
    }
}

/// Position sets accepted by the filter, keyed by `chrom:pos`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSets {
    pub homozygous: HashSet<String>,
    pub mixed: HashSet<String>,
}

impl CallSets {
    pub fn from_calls<'a>(
        calls: impl IntoIterator<Item = &'a VariantCall>,
        filter: &CallFilter,
    ) -> Self {
        let mut sets = Self::default();

        for call in calls {
            match filter.classify(call) {
                CallClass::Homozygous => {
                    sets.homozygous.insert(call.absolute_position());
                }
                CallClass::Mixed => {
                    sets.mixed.insert(call.absolute_position());
                }
                CallClass::Rejected(reason) => {
                    debug!(
                        position = %call.absolute_position(),
                        ?reason,
                        "variant call rejected"
                    );
                }
            }
        }

        sets
    }

    /// Union of homozygous and mixed positions.
    #[must_use]
    pub fn called_positions(&self) -> HashSet<String> {
        self.homozygous.union(&self.mixed).cloned().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.homozygous.is_empty() && self.mixed.is_empty()
    }
}
