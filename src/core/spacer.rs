use serde::Serialize;

use crate::core::types::SpacerId;

/// A single spacer from the reference set: identifier plus nucleotide
/// pattern, uppercase by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spacer {
    pub id: SpacerId,
    #[serde(with = "sequence_as_string")]
    pub sequence: Vec<u8>,
}

impl Spacer {
    pub fn new(id: impl Into<String>, sequence: impl AsRef<[u8]>) -> Self {
        Self {
            id: SpacerId::new(id),
            sequence: sequence
                .as_ref()
                .iter()
                .map(u8::to_ascii_uppercase)
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

mod sequence_as_string {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(sequence: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&String::from_utf8_lossy(sequence))
    }
}

/// Reverse complement of a nucleotide sequence.
///
/// IUPAC ambiguity codes map to their complements; anything unrecognized
/// (including `N`) maps to `N`, which never matches a pattern base.
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence
        .iter()
        .rev()
        .map(|&base| match base.to_ascii_uppercase() {
            b'A' => b'T',
            b'T' | b'U' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            b'R' => b'Y',
            b'Y' => b'R',
            b'K' => b'M',
            b'M' => b'K',
            b'B' => b'V',
            b'V' => b'B',
            b'D' => b'H',
            b'H' => b'D',
            b'S' => b'S',
            b'W' => b'W',
            _ => b'N',
        })
        .collect()
}
