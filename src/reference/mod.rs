//! Reference data loaded once per process and passed by reference.
//!
//! Three read-only tables drive the pipelines:
//!
//! - [`SpacerReference`]: the 43 named spacer patterns
//! - [`LineageTable`]: known binary codes and their SB numbers
//! - [`DefiningSnpTable`]: genomic positions that define lineage groups
//!
//! A load failure here is fatal to the run: no sample can be typed without
//! its reference data, so these errors propagate to `main` instead of
//! degrading to sentinel results the way per-sample failures do.

use thiserror::Error;

use crate::parsing::ParseError;

pub mod defining_snps;
pub mod lineages;
pub mod spacers;

pub use defining_snps::DefiningSnpTable;
pub use lineages::LineageTable;
pub use spacers::SpacerReference;

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("failed to load reference data: {0}")]
    Parse(#[from] ParseError),

    #[error("expected 43 spacers in reference, found {0}")]
    WrongSpacerCount(usize),

    #[error("duplicate spacer identifier: {0}")]
    DuplicateSpacer(String),
}
