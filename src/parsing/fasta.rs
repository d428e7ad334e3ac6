//! Parser for the spacer reference FASTA.
//!
//! Each record is one spacer: the identifier comes from the record name and
//! the nucleotide pattern from the sequence. Supports both uncompressed and
//! gzip compressed files (`.fasta`, `.fa`, `.fasta.gz`, ...).

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::core::spacer::Spacer;
use crate::parsing::ParseError;

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a spacer FASTA file in record order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, or `ParseError::InvalidFormat` if the file holds no
/// records or a record has an empty sequence.
pub fn parse_spacer_file(path: &Path) -> Result<Vec<Spacer>, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        let reader = BufReader::new(GzDecoder::new(file));
        parse_spacer_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        parse_spacer_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Parse from a noodles FASTA reader
fn parse_spacer_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<Spacer>, ParseError> {
    let mut spacers = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence();

        if sequence.is_empty() {
            return Err(ParseError::InvalidFormat(format!(
                "Spacer '{name}' has an empty sequence"
            )));
        }

        spacers.push(Spacer::new(name, sequence.as_ref()));
    }

    if spacers.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in spacer FASTA".to_string(),
        ));
    }

    Ok(spacers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_spacer_file() {
        let fasta_content = b">spacer01\nGATTACAGATTACA\n>spacer02\nacgtacgt\n";

        let mut temp = NamedTempFile::with_suffix(".fasta").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let spacers = parse_spacer_file(temp.path()).unwrap();
        assert_eq!(spacers.len(), 2);
        assert_eq!(spacers[0].id.as_str(), "spacer01");
        assert_eq!(spacers[0].sequence, b"GATTACAGATTACA");
        // Sequences are uppercased at load
        assert_eq!(spacers[1].sequence, b"ACGTACGT");
    }

    #[test]
    fn test_parse_gzipped_spacer_file() {
        let mut temp = NamedTempFile::with_suffix(".fasta.gz").unwrap();
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b">spacer01\nGATTACA\n").unwrap();
        temp.write_all(&encoder.finish().unwrap()).unwrap();
        temp.flush().unwrap();

        let spacers = parse_spacer_file(temp.path()).unwrap();
        assert_eq!(spacers.len(), 1);
        assert_eq!(spacers[0].sequence, b"GATTACA");
    }

    #[test]
    fn test_parse_empty_fasta() {
        let mut temp = NamedTempFile::with_suffix(".fasta").unwrap();
        temp.write_all(b"").unwrap();
        temp.flush().unwrap();

        assert!(parse_spacer_file(temp.path()).is_err());
    }
}
