//! Parser for the spoligotype lineage lookup table.
//!
//! Rows are whitespace-delimited: an arbitrary identifier, the SB label, and
//! the 43-character binary code, e.g.
//!
//! ```text
//! 252 SB0673 1101111111111111101111111111100001111111111
//! ```

use std::path::Path;

use tracing::warn;

use crate::parsing::ParseError;
use crate::reference::lineages::LineageRecord;
use crate::utils::validation::is_binary_string;

/// Parse a lineage table file in row order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if no usable rows are found.
pub fn parse_lineage_file(path: &Path) -> Result<Vec<LineageRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_lineage_text(&content)
}

/// Parse lineage table text in row order, skipping malformed rows.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if no usable rows are found.
pub fn parse_lineage_text(text: &str) -> Result<Vec<LineageRecord>, ParseError> {
    let mut records = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            warn!(line, "skipping lineage row with fewer than 3 fields");
            continue;
        }
        if !is_binary_string(fields[2]) {
            warn!(line, "skipping lineage row with non-binary code");
            continue;
        }

        records.push(LineageRecord {
            id: fields[0].to_string(),
            sb: fields[1].to_string(),
            binary: fields[2].to_string(),
        });
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No usable rows found in lineage table".to_string(),
        ));
    }

    Ok(records)
}
