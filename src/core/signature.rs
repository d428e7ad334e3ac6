//! Spoligotype signature types: spacer counts, the 43-bit binary signature,
//! and its 15-digit octal form.
//!
//! The transformation chain is:
//!
//! 1. [`SpacerCounts`]: per-spacer approximate-match counts, zero-filled so
//!    every reference spacer is present
//! 2. [`BinarySignature`]: counts thresholded to presence/absence bits,
//!    ordered by sorted spacer identifier
//! 3. [`OctalCode`]: the binary signature regrouped into octal digits, the
//!    form used by the SB numbering convention

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::core::types::SpacerId;

/// Number of spacer positions in a spoligotype signature.
pub const SPACER_COUNT: usize = 43;

/// Number of digits in the octal form: 14 bit-triplets plus the lone
/// trailing bit for spacer 43.
pub const OCTAL_LEN: usize = 15;

/// Default presence threshold. A spacer is called present when its count is
/// strictly greater than this value.
pub const DEFAULT_CALL_THRESHOLD: u64 = 4;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("expected 43 spacer counts, got {0}")]
    WrongCountLen(usize),

    #[error("expected 43 bits in binary signature, got {0}")]
    WrongBitLen(usize),

    #[error("invalid character {0:?} in binary signature")]
    InvalidBit(char),
}

/// Per-spacer match counts, keyed and ordered by spacer identifier.
///
/// The map is complete by construction: [`SpacerCounts::zero_filled`] seeds
/// every reference spacer with a zero count, so downstream binarization
/// always sees all [`SPACER_COUNT`] positions even when no read matched a
/// spacer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacerCounts {
    counts: BTreeMap<SpacerId, u64>,
}

impl SpacerCounts {
    /// Build a complete count table over `ids` with every count at zero.
    pub fn zero_filled<'a>(ids: impl IntoIterator<Item = &'a SpacerId>) -> Self {
        Self {
            counts: ids.into_iter().map(|id| (id.clone(), 0)).collect(),
        }
    }

    /// Add `n` occurrences to a spacer's count. Identifiers outside the
    /// seeded set are ignored; counting is defined only over the reference.
    pub fn add(&mut self, id: &SpacerId, n: u64) {
        if let Some(count) = self.counts.get_mut(id) {
            *count += n;
        }
    }

    #[must_use]
    pub fn get(&self, id: &SpacerId) -> Option<u64> {
        self.counts.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts in sorted identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&SpacerId, u64)> {
        self.counts.iter().map(|(id, &count)| (id, count))
    }

    /// The colon-joined count string handed to reporting collaborators,
    /// e.g. `62:48:0:...`, in sorted identifier order.
    #[must_use]
    pub fn colon_joined(&self) -> String {
        self.counts
            .values()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(":")
    }
}

impl fmt::Display for SpacerCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.colon_joined())
    }
}

impl Serialize for SpacerCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The 43-bit spacer presence/absence vector.
///
/// Bit order follows the sorted spacer-identifier order of the counts it was
/// called from, which matches the bit order of the lineage database codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySignature {
    bits: Vec<bool>,
}

impl BinarySignature {
    /// Threshold each spacer count: bit = 1 iff `count > threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::WrongCountLen`] unless `counts` covers
    /// exactly [`SPACER_COUNT`] spacers.
    pub fn call(counts: &SpacerCounts, threshold: u64) -> Result<Self, SignatureError> {
        if counts.len() != SPACER_COUNT {
            return Err(SignatureError::WrongCountLen(counts.len()));
        }

        Ok(Self {
            bits: counts.iter().map(|(_, count)| count > threshold).collect(),
        })
    }

    /// Build from raw bits.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::WrongBitLen`] unless exactly
    /// [`SPACER_COUNT`] bits are given.
    pub fn from_bits(bits: Vec<bool>) -> Result<Self, SignatureError> {
        if bits.len() != SPACER_COUNT {
            return Err(SignatureError::WrongBitLen(bits.len()));
        }
        Ok(Self { bits })
    }

    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// True when no spacer was called present.
    #[must_use]
    pub fn is_all_zeros(&self) -> bool {
        self.bits.iter().all(|&bit| !bit)
    }

    #[must_use]
    pub fn to_octal(&self) -> OctalCode {
        OctalCode::encode(&self.bits)
    }
}

impl fmt::Display for BinarySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

impl FromStr for BinarySignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(SignatureError::InvalidBit(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_bits(bits)
    }
}

impl Serialize for BinarySignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The 15-digit octal rendering of a binary signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctalCode {
    digits: Vec<u8>,
}

impl OctalCode {
    /// Encode a bit sequence into octal digits.
    ///
    /// Bits are taken in 14 groups of three followed by one group holding
    /// only bit 43. A full group reads as `4*b0 + 2*b1 + b2`; the lone
    /// trailing bit reads as `1` when set, never `4`, matching the SB
    /// numbering convention. Bits past the end of a short sequence read as
    /// absent.
    #[must_use]
    pub fn encode(bits: &[bool]) -> Self {
        let bit = |index: usize| -> u8 {
            if index < SPACER_COUNT {
                bits.get(index).map_or(0, |&b| u8::from(b))
            } else {
                0
            }
        };

        let mut digits = Vec::with_capacity(OCTAL_LEN);
        for start in (0..SPACER_COUNT).step_by(3) {
            let digit = if start + 1 >= SPACER_COUNT {
                // Lone spacer 43: present reads as 1, not 4.
                bit(start)
            } else {
                4 * bit(start) + 2 * bit(start + 1) + bit(start + 2)
            };
            digits.push(digit);
        }

        Self { digits }
    }

    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl fmt::Display for OctalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl Serialize for OctalCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
