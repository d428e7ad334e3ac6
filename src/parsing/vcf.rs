//! Parser for called-variant VCF files.
//!
//! Only the fields the defining-SNP filter needs are extracted: CHROM, POS,
//! REF, ALT, QUAL, and the INFO `AC` and `MQ` values. Parsing is manual text
//! parsing rather than a full VCF model: the filter needs raw access to
//! INFO fields because producing tools disagree on their shape (freebayes
//! emits `MQ` as a list, GATK as a float).
//!
//! A malformed record is skipped with a warning; a file without a `#CHROM`
//! header line is rejected as a whole.

use std::path::Path;

use tracing::{debug, warn};

use crate::core::variant::VariantCall;
use crate::parsing::ParseError;

/// Parse a VCF file into variant calls, skipping malformed records.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if it has no `#CHROM` header line.
pub fn parse_vcf_file(path: &Path) -> Result<Vec<VariantCall>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_vcf_text(&content)
}

/// Parse VCF text into variant calls, skipping malformed records.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the text has no `#CHROM` header
/// line.
pub fn parse_vcf_text(text: &str) -> Result<Vec<VariantCall>, ParseError> {
    let mut calls = Vec::new();
    let mut saw_header = false;

    for line in text.lines() {
        if line.starts_with("#CHROM") {
            saw_header = true;
            continue;
        }
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        match parse_record_line(line) {
            Some(call) => calls.push(call),
            None => warn!(line, "skipping malformed VCF record"),
        }
    }

    if !saw_header {
        return Err(ParseError::InvalidFormat(
            "No #CHROM header line found in VCF".to_string(),
        ));
    }

    Ok(calls)
}

/// Parse one data line. Returns `None` when the fixed columns are unusable;
/// optional fields degrade to `None` within the call instead.
fn parse_record_line(line: &str) -> Option<VariantCall> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 8 {
        return None;
    }

    let chrom = fields[0].to_string();
    let position: u64 = fields[1].parse().ok()?;
    let reference = fields[3].to_string();
    let alternate = parse_alternate(fields[4]);
    let quality = parse_quality(fields[5]);
    let info = fields[7];

    let allele_count = info_value(info, "AC")
        .map(first_scalar)
        .and_then(|v| v.parse::<i64>().ok());
    let mapping_quality = info_value(info, "MQ")
        .map(first_scalar)
        .and_then(|v| v.parse::<f64>().ok());

    Some(VariantCall {
        chrom,
        position,
        reference,
        alternate,
        quality,
        allele_count,
        mapping_quality,
    })
}

/// First alternate allele; `.` (or an empty column) is a no-call.
fn parse_alternate(field: &str) -> Option<String> {
    let first = field.split(',').next().unwrap_or(field);
    match first {
        "" | "." => None,
        allele => Some(allele.to_string()),
    }
}

fn parse_quality(field: &str) -> Option<f64> {
    if field == "." {
        return None;
    }
    let quality = field.parse().ok();
    if quality.is_none() {
        debug!(field, "unparseable QUAL column");
    }
    quality
}

/// Look up `key` in a semicolon-separated INFO column. Flag-style entries
/// without a value are not candidates.
fn info_value<'a>(info: &'a str, key: &str) -> Option<&'a str> {
    info.split(';').find_map(|entry| {
        let (k, v) = entry.split_once('=')?;
        (k == key).then_some(v)
    })
}

/// Unwrap a possibly multi-valued INFO field to its first element.
fn first_scalar(value: &str) -> &str {
    value.split(',').next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";

    #[test]
    fn test_parse_vcf_text() {
        let vcf = format!(
            "##fileformat=VCFv4.2\n{HEADER}\
             NC_002945.4\t100\t.\tA\tG\t200\tPASS\tAC=2;MQ=60\n\
             NC_002945.4\t200\t.\tC\tT\t180.5\tPASS\tAC=1;DP=40;MQ=59.2\n"
        );

        let calls = parse_vcf_text(&vcf).unwrap();
        assert_eq!(calls.len(), 2);

        assert_eq!(calls[0].chrom, "NC_002945.4");
        assert_eq!(calls[0].position, 100);
        assert_eq!(calls[0].reference, "A");
        assert_eq!(calls[0].alternate.as_deref(), Some("G"));
        assert_eq!(calls[0].quality, Some(200.0));
        assert_eq!(calls[0].allele_count, Some(2));
        assert_eq!(calls[0].mapping_quality, Some(60.0));

        assert_eq!(calls[1].allele_count, Some(1));
        assert_eq!(calls[1].mapping_quality, Some(59.2));
    }

    #[test]
    fn test_mapping_quality_list_unwraps_to_first_element() {
        let vcf = format!("{HEADER}NC_002945.4\t100\t.\tA\tG\t200\t.\tAC=2;MQ=60,55\n");
        let calls = parse_vcf_text(&vcf).unwrap();
        assert_eq!(calls[0].mapping_quality, Some(60.0));
    }

    #[test]
    fn test_no_call_and_missing_fields() {
        let vcf = format!(
            "{HEADER}\
             NC_002945.4\t100\t.\tA\t.\t.\t.\tDP=10\n\
             NC_002945.4\t200\t.\tA\tG\t200\t.\tAC=2\n"
        );
        let calls = parse_vcf_text(&vcf).unwrap();

        assert_eq!(calls[0].alternate, None);
        assert_eq!(calls[0].quality, None);
        assert_eq!(calls[0].allele_count, None);
        assert_eq!(calls[0].mapping_quality, None);

        // MQ absent entirely
        assert_eq!(calls[1].mapping_quality, None);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let vcf = format!(
            "{HEADER}\
             not-enough-fields\n\
             NC_002945.4\tnot-a-number\t.\tA\tG\t200\t.\tAC=2;MQ=60\n\
             NC_002945.4\t300\t.\tA\tG\t200\t.\tAC=2;MQ=60\n"
        );
        let calls = parse_vcf_text(&vcf).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].position, 300);
    }

    #[test]
    fn test_missing_chrom_header_rejects_file() {
        let result = parse_vcf_text("##fileformat=VCFv4.2\nNC_002945.4\t1\t.\tA\tG\t200\t.\tAC=2\n");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_multiallelic_alt_takes_first() {
        let vcf = format!("{HEADER}NC_002945.4\t100\t.\tA\tG,T\t200\t.\tAC=2,1;MQ=60\n");
        let calls = parse_vcf_text(&vcf).unwrap();
        assert_eq!(calls[0].alternate.as_deref(), Some("G"));
        assert_eq!(calls[0].allele_count, Some(2));
    }
}
