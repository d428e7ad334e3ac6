use std::collections::HashMap;
use std::path::Path;

use crate::parsing::snp_table::parse_snp_table_file;
use crate::reference::ReferenceError;

/// How a table position participates in group classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnpCategory {
    /// Presence of a call at the position implies the group.
    Normal,
    /// Absence of any call at the position implies the group; only
    /// evaluated when no inverted position was actually called.
    Inverted,
    /// Explicitly excluded from consideration, never matched.
    Masked,
}

/// The defining-SNP reference table: absolute position (`chrom:pos`) to
/// lineage-group label, partitioned by [`SnpCategory`].
#[derive(Debug, Clone, Default)]
pub struct DefiningSnpTable {
    normal: HashMap<String, String>,
    inverted: HashMap<String, String>,
    masked: HashMap<String, String>,
}

impl DefiningSnpTable {
    /// Load the table from a two-row tab-separated file.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::Parse`] if the file cannot be read or holds
    /// no position columns.
    pub fn load_from_file(path: &Path) -> Result<Self, ReferenceError> {
        Ok(parse_snp_table_file(path)?)
    }

    pub fn insert(&mut self, position: impl Into<String>, group: impl Into<String>, category: SnpCategory) {
        let target = match category {
            SnpCategory::Normal => &mut self.normal,
            SnpCategory::Inverted => &mut self.inverted,
            SnpCategory::Masked => &mut self.masked,
        };
        target.insert(position.into(), group.into());
    }

    /// Positions whose called presence implies their group.
    #[must_use]
    pub fn normal(&self) -> &HashMap<String, String> {
        &self.normal
    }

    /// Positions whose absence implies their group.
    #[must_use]
    pub fn inverted(&self) -> &HashMap<String, String> {
        &self.inverted
    }

    #[must_use]
    pub fn is_masked(&self, position: &str) -> bool {
        self.masked.contains_key(position)
    }

    /// Total number of positions across all three categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.normal.len() + self.inverted.len() + self.masked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_partitions_by_category() {
        let mut table = DefiningSnpTable::default();
        table.insert("chr:1", "A", SnpCategory::Normal);
        table.insert("chr:2", "B", SnpCategory::Inverted);
        table.insert("chr:3", "C", SnpCategory::Masked);

        assert_eq!(table.normal().len(), 1);
        assert_eq!(table.inverted().len(), 1);
        assert!(table.is_masked("chr:3"));
        assert!(!table.is_masked("chr:1"));
        assert_eq!(table.len(), 3);
    }
}
