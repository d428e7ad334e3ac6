use std::path::Path;

use serde::Serialize;

use crate::core::types::SbResolution;
use crate::parsing::lineage::parse_lineage_file;
use crate::reference::ReferenceError;

/// One row of the lineage database: an arbitrary identifier, the SB label,
/// and the 43-character binary code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineageRecord {
    pub id: String,
    pub sb: String,
    pub binary: String,
}

/// The lineage lookup table, in file order.
///
/// Lookup is exact string match on the binary code; the first matching row
/// wins. The database is assumed to carry no duplicate codes, which is not
/// enforced.
#[derive(Debug, Clone)]
pub struct LineageTable {
    records: Vec<LineageRecord>,
}

impl LineageTable {
    #[must_use]
    pub fn new(records: Vec<LineageRecord>) -> Self {
        Self { records }
    }

    /// Load the table from a whitespace-delimited file.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::Parse`] if the file cannot be read or holds
    /// no usable rows.
    pub fn load_from_file(path: &Path) -> Result<Self, ReferenceError> {
        Ok(Self::new(parse_lineage_file(path)?))
    }

    /// Resolve a binary signature string to its SB designation.
    ///
    /// An unmatched all-zeros signature resolves to the distinguishing
    /// [`SbResolution::AllZeros`] sentinel; any other unmatched signature is
    /// [`SbResolution::NotFound`].
    #[must_use]
    pub fn resolve(&self, binary: &str) -> SbResolution {
        if let Some(record) = self.records.iter().find(|record| record.binary == binary) {
            return SbResolution::Known(record.sb.clone());
        }

        if !binary.is_empty() && binary.chars().all(|c| c == '0') {
            SbResolution::AllZeros
        } else {
            SbResolution::NotFound
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineageRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
