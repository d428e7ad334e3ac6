//! Core data types for spoligotype calling and group classification.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Spacer`], [`SpacerId`]: a named spacer pattern from the reference set
//! - [`SpacerCounts`]: per-spacer approximate-match counts, zero-filled
//! - [`BinarySignature`], [`OctalCode`]: the 43-bit signature and its
//!   15-digit octal form
//! - [`SbResolution`]: outcome of the lineage-database lookup
//! - [`VariantCall`], [`CallFilter`], [`CallSets`]: filtered VCF calls for
//!   defining-SNP classification
//!
//! ## Bit ordering
//!
//! Spacer identifiers sort lexicographically (`spacer01` .. `spacer43`), and
//! every ordered view here (counts, signature bits, octal digits) follows
//! that order. The lineage database records its binary codes in the same
//! order, so lookups are plain string equality.
//!
//! [`Spacer`]: spacer::Spacer
//! [`SpacerId`]: types::SpacerId
//! [`SpacerCounts`]: signature::SpacerCounts
//! [`BinarySignature`]: signature::BinarySignature
//! [`OctalCode`]: signature::OctalCode
//! [`SbResolution`]: types::SbResolution
//! [`VariantCall`]: variant::VariantCall
//! [`CallFilter`]: variant::CallFilter
//! [`CallSets`]: variant::CallSets

pub mod signature;
pub mod spacer;
pub mod types;
pub mod variant;
