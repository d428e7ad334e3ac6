//! Parser for the defining-SNP position table.
//!
//! The table is two tab-separated rows exported from the curated worksheet:
//! the first row lists absolute positions (`chrom:pos`), the second the
//! lineage group each position defines. Position spellings carry two
//! conventions:
//!
//! - a leading `!` marks an *inverted* position: absence of a call there
//!   implies the group
//! - `###`-wrapping *masks* a position out of consideration entirely
//!
//! Leading columns whose header is not a position (worksheet row labels)
//! are skipped.

use std::path::Path;

use tracing::{debug, warn};

use crate::reference::defining_snps::{DefiningSnpTable, SnpCategory};
use crate::parsing::ParseError;
use crate::utils::validation::is_position_key;

/// Parse a defining-SNP table file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if it has fewer than two rows or no position
/// columns.
pub fn parse_snp_table_file(path: &Path) -> Result<DefiningSnpTable, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_snp_table_text(&content)
}

/// Parse defining-SNP table text.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text has fewer than two rows
/// or no position columns.
pub fn parse_snp_table_text(text: &str) -> Result<DefiningSnpTable, ParseError> {
    // Masked positions start with '#', so comment filtering would eat data:
    // take the first two non-empty lines as-is.
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let positions: Vec<&str> = match lines.next() {
        Some(line) => line.split('\t').collect(),
        None => {
            return Err(ParseError::InvalidFormat(
                "Defining-SNP table is empty".to_string(),
            ))
        }
    };
    let groups: Vec<&str> = match lines.next() {
        Some(line) => line.split('\t').collect(),
        None => {
            return Err(ParseError::InvalidFormat(
                "Defining-SNP table has no group row".to_string(),
            ))
        }
    };

    if positions.len() != groups.len() {
        warn!(
            positions = positions.len(),
            groups = groups.len(),
            "defining-SNP table rows have unequal lengths; pairing up to the shorter"
        );
    }

    let mut table = DefiningSnpTable::default();

    for (raw, group) in positions.iter().zip(&groups) {
        let raw = raw.trim();
        let group = group.trim();

        let (category, position) = if raw.contains('!') {
            (SnpCategory::Inverted, raw.replace('!', ""))
        } else if raw.contains("###") {
            (SnpCategory::Masked, raw.replace("###", ""))
        } else {
            (SnpCategory::Normal, raw.to_string())
        };

        if !is_position_key(&position) {
            // Worksheet row-label columns land here.
            debug!(column = raw, "skipping non-position column");
            continue;
        }
        if group.is_empty() {
            warn!(%position, "skipping position with empty group label");
            continue;
        }

        table.insert(position, group, category);
    }

    if table.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No position columns found in defining-SNP table".to_string(),
        ));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_three_conventions() {
        let text = "Group\tNC_002945.4:100\t!NC_002945.4:200\t###NC_002945.4:300###\n\
                    labels\tBov_1\tBov_2\tBov_3\n";

        let table = parse_snp_table_text(text).unwrap();
        assert_eq!(
            table.normal().get("NC_002945.4:100").map(String::as_str),
            Some("Bov_1")
        );
        assert_eq!(
            table.inverted().get("NC_002945.4:200").map(String::as_str),
            Some("Bov_2")
        );
        assert!(table.is_masked("NC_002945.4:300"));
        assert!(table.normal().get("NC_002945.4:300").is_none());
    }

    #[test]
    fn test_leading_label_column_is_skipped() {
        let text = "0\tNC_002945.4:100\nindex\tBov_1\n";
        let table = parse_snp_table_text(text).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_single_row_is_an_error() {
        assert!(matches!(
            parse_snp_table_text("NC_002945.4:100\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_no_position_columns_is_an_error() {
        assert!(matches!(
            parse_snp_table_text("a\tb\nc\td\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
