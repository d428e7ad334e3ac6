//! In-process approximate matcher: sliding-window comparison with a
//! bounded substitution count.

use tracing::debug;

use crate::core::signature::SpacerCounts;
use crate::core::spacer::reverse_complement;
use crate::matching::{MatchError, SpacerMatcher};
use crate::parsing::fastq::{ReadFiles, SequenceReader};
use crate::reference::SpacerReference;

/// Default substitution tolerance per spacer occurrence.
pub const DEFAULT_MAX_MISMATCHES: u32 = 1;

/// Counts spacer occurrences by scanning every window of every read against
/// each spacer pattern and its reverse complement.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    max_mismatches: u32,
}

impl FuzzyMatcher {
    #[must_use]
    pub fn new(max_mismatches: u32) -> Self {
        Self { max_mismatches }
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MISMATCHES)
    }
}

impl SpacerMatcher for FuzzyMatcher {
    fn count_occurrences(
        &self,
        spacers: &SpacerReference,
        reads: &ReadFiles,
    ) -> Result<SpacerCounts, MatchError> {
        // Checking the read against a pattern and its reverse complement is
        // equivalent to checking both read orientations against the pattern.
        let patterns: Vec<_> = spacers
            .iter()
            .map(|spacer| {
                (
                    &spacer.id,
                    spacer.sequence.as_slice(),
                    reverse_complement(&spacer.sequence),
                )
            })
            .collect();

        let mut counts = SpacerCounts::zero_filled(spacers.ids());

        for path in reads.paths() {
            let mut reader = SequenceReader::open(path).map_err(|source| MatchError::ReadInput {
                path: path.to_path_buf(),
                source,
            })?;

            let reads_seen = reader
                .try_for_each_sequence(|sequence| {
                    for (id, forward, rc) in &patterns {
                        let occurrences = count_approximate(sequence, forward, self.max_mismatches)
                            + count_approximate(sequence, rc, self.max_mismatches);
                        if occurrences > 0 {
                            counts.add(id, occurrences);
                        }
                    }
                })
                .map_err(|source| MatchError::ReadInput {
                    path: path.to_path_buf(),
                    source,
                })?;

            debug!(path = %path.display(), reads = reads_seen, "scanned read file");
        }

        Ok(counts)
    }
}

/// Count windows of `text` within `max_mismatches` substitutions of
/// `pattern`. Comparison ignores ASCII case.
fn count_approximate(text: &[u8], pattern: &[u8], max_mismatches: u32) -> u64 {
    if pattern.is_empty() || text.len() < pattern.len() {
        return 0;
    }

    let mut occurrences = 0;
    for window in text.windows(pattern.len()) {
        let mut mismatches = 0;
        for (a, b) in window.iter().zip(pattern) {
            if !a.eq_ignore_ascii_case(b) {
                mismatches += 1;
                if mismatches > max_mismatches {
                    break;
                }
            }
        }
        if mismatches <= max_mismatches {
            occurrences += 1;
        }
    }

    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::TempDir;

    use crate::core::signature::SPACER_COUNT;
    use crate::core::spacer::Spacer;
    use crate::core::types::SpacerId;

    // A pattern whose reverse complement stays several substitutions away
    // from every window of itself, so orientation tests stay unambiguous.
    const PROBE: &[u8] = b"AAACCCGGGTTTAAACCCGGGTTTA";

    fn synthetic_reference() -> SpacerReference {
        let spacers = (1..=SPACER_COUNT)
            .map(|i| {
                if i == 2 {
                    Spacer::new("spacer02", PROBE)
                } else {
                    Spacer::new(format!("spacer{i:02}"), [b'T'; 25])
                }
            })
            .collect();
        SpacerReference::new(spacers).unwrap()
    }

    fn write_fastq(dir: &TempDir, name: &str, sequences: &[&[u8]]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for (i, sequence) in sequences.iter().enumerate() {
            writeln!(file, "@read{i}").unwrap();
            file.write_all(sequence).unwrap();
            writeln!(file).unwrap();
            writeln!(file, "+").unwrap();
            writeln!(file, "{}", "I".repeat(sequence.len())).unwrap();
        }
        path
    }

    #[test]
    fn test_count_approximate_exact_and_fuzzy() {
        assert_eq!(count_approximate(b"xxGATTACAxx", b"GATTACA", 0), 1);
        // One substitution tolerated
        assert_eq!(count_approximate(b"xxGATTCCAxx", b"GATTACA", 1), 1);
        // Two substitutions rejected
        assert_eq!(count_approximate(b"xxGGTTCCAxx", b"GATTACA", 1), 0);
        // Case-insensitive
        assert_eq!(count_approximate(b"xxgattacaxx", b"GATTACA", 0), 1);
    }

    #[test]
    fn test_count_approximate_short_text() {
        assert_eq!(count_approximate(b"GAT", b"GATTACA", 1), 0);
        assert_eq!(count_approximate(b"", b"GATTACA", 1), 0);
    }

    #[test]
    fn test_zero_reads_still_covers_all_spacers() {
        let dir = TempDir::new().unwrap();
        let reference = synthetic_reference();
        let r1 = write_fastq(&dir, "empty.fastq", &[]);

        let counts = FuzzyMatcher::default()
            .count_occurrences(&reference, &ReadFiles::single(r1))
            .unwrap();

        assert_eq!(counts.len(), SPACER_COUNT);
        assert!(counts.iter().all(|(_, count)| count == 0));
    }

    #[test]
    fn test_counts_total_occurrences_across_reads() {
        let dir = TempDir::new().unwrap();
        let reference = synthetic_reference();

        // Three occurrences over two reads, one carrying a substitution.
        let doubled = [PROBE, b"NNNNN".as_slice(), PROBE].concat();
        let mut mutated = PROBE.to_vec();
        mutated[3] = b'G';
        let r1 = write_fastq(&dir, "r1.fastq", &[&doubled, &mutated]);

        let counts = FuzzyMatcher::default()
            .count_occurrences(&reference, &ReadFiles::single(r1))
            .unwrap();

        assert_eq!(counts.get(&SpacerId::new("spacer02")), Some(3));
        assert_eq!(counts.get(&SpacerId::new("spacer01")), Some(0));
    }

    #[test]
    fn test_reverse_complement_orientation_is_counted() {
        let dir = TempDir::new().unwrap();
        let reference = synthetic_reference();
        let r1 = write_fastq(&dir, "rc.fastq", &[reverse_complement(PROBE).as_slice()]);

        let counts = FuzzyMatcher::default()
            .count_occurrences(&reference, &ReadFiles::single(r1))
            .unwrap();

        assert_eq!(counts.get(&SpacerId::new("spacer02")), Some(1));
    }

    #[test]
    fn test_paired_files_are_both_scanned() {
        let dir = TempDir::new().unwrap();
        let reference = synthetic_reference();
        let r1 = write_fastq(&dir, "r1.fastq", &[PROBE]);
        let r2 = write_fastq(&dir, "r2.fastq", &[PROBE]);

        let counts = FuzzyMatcher::default()
            .count_occurrences(&reference, &ReadFiles::paired(r1, r2))
            .unwrap();

        assert_eq!(counts.get(&SpacerId::new("spacer02")), Some(2));
    }

    #[test]
    fn test_missing_read_file_is_a_hard_error() {
        let reference = synthetic_reference();
        let result = FuzzyMatcher::default()
            .count_occurrences(&reference, &ReadFiles::single("/nonexistent/reads.fastq"));
        assert!(matches!(result, Err(MatchError::ReadInput { .. })));
    }
}
