//! Defining-SNP group classification.
//!
//! Classification is a set computation over the filtered call positions:
//!
//! 1. Every normal table position with a call contributes its group; a
//!    contribution from the mixed set flags a potential mixed infection.
//! 2. When *no* inverted position was called at all, every inverted
//!    position contributes its group. This is deliberately coarse: the rule
//!    adds all inverted groups as a set, not per-position determinations,
//!    and is preserved exactly from the established workflow.
//! 3. An empty result degrades to the `"No defining SNPs"` sentinel, so
//!    reporting collaborators always have something to render.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::core::variant::{CallFilter, CallSets};
use crate::parsing::vcf::parse_vcf_file;
use crate::reference::DefiningSnpTable;

/// Sentinel group list entry for samples with no defining SNPs.
pub const NO_DEFINING_SNPS: &str = "No defining SNPs";

/// Group classification result for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCall {
    /// Sorted lineage-group labels, or a one-element sentinel.
    pub groups: Vec<String>,
    /// True when a defining position was hit by a heterozygous-like call.
    pub mixed: bool,
}

impl GroupCall {
    fn sentinel(message: impl Into<String>) -> Self {
        Self {
            groups: vec![message.into()],
            mixed: false,
        }
    }
}

impl fmt::Display for GroupCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.groups.join(", "))?;
        if self.mixed {
            write!(f, " [MIXED]")?;
        }
        Ok(())
    }
}

/// Classifies samples against a defining-SNP table.
pub struct GroupClassifier<'a> {
    table: &'a DefiningSnpTable,
    filter: CallFilter,
}

impl<'a> GroupClassifier<'a> {
    #[must_use]
    pub fn new(table: &'a DefiningSnpTable) -> Self {
        Self {
            table,
            filter: CallFilter::default(),
        }
    }

    #[must_use]
    pub fn with_filter(mut self, filter: CallFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Classify a sample from its filtered call sets.
    #[must_use]
    pub fn classify(&self, sets: &CallSets) -> GroupCall {
        let called = sets.called_positions();

        let mut groups = BTreeSet::new();
        let mut mixed = false;

        for position in &called {
            if let Some(group) = self.table.normal().get(position) {
                groups.insert(group.clone());
                if sets.mixed.contains(position) {
                    mixed = true;
                }
            }
        }

        // A call at any inverted position contradicts the absence signal,
        // so the whole inverted set is withheld.
        let inverted_contradicted = self
            .table
            .inverted()
            .keys()
            .any(|position| called.contains(position));
        if !inverted_contradicted {
            for group in self.table.inverted().values() {
                groups.insert(group.clone());
            }
        }

        if groups.is_empty() {
            GroupCall::sentinel(NO_DEFINING_SNPS)
        } else {
            GroupCall {
                groups: groups.into_iter().collect(),
                mixed,
            }
        }
    }

    /// Classify a sample from its VCF file.
    ///
    /// A file-level failure degrades to a one-element diagnostic list
    /// tagged with the filename; it never raises to the caller. Other
    /// samples in a batch are unaffected.
    #[must_use]
    pub fn classify_vcf(&self, path: &Path) -> GroupCall {
        match parse_vcf_file(path) {
            Ok(calls) => self.classify(&CallSets::from_calls(&calls, &self.filter)),
            Err(error) => {
                warn!(path = %path.display(), %error, "rejecting VCF file");
                GroupCall::sentinel(format!("File error: {}", path.display()))
            }
        }
    }
}
