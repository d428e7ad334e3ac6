//! Per-sample typing pipelines built on the reference tables.
//!
//! - [`SpoligotypeCaller`]: raw reads → spacer counts → binary signature →
//!   octal code → SB number
//! - [`GroupClassifier`]: called variants → filtered position sets → sorted
//!   lineage-group labels
//!
//! Both pipelines are pure transformations over immutable reference data;
//! samples are independent and can be processed in parallel by an outer
//! orchestration layer without any shared mutable state.
//!
//! [`SpoligotypeCaller`]: spoligotype::SpoligotypeCaller
//! [`GroupClassifier`]: groups::GroupClassifier

use thiserror::Error;

use crate::core::signature::SignatureError;
use crate::matching::MatchError;

pub mod groups;
pub mod spoligotype;

pub use groups::{GroupCall, GroupClassifier};
pub use spoligotype::{SpoligotypeCaller, SpoligotypeRecord};

#[derive(Error, Debug)]
pub enum TypingError {
    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}
