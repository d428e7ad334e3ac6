//! FASTQ read input, plain or gzip compressed, single- or paired-end.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use noodles::fastq;

use crate::parsing::ParseError;

/// The read files for one sample: a required first file and an optional
/// mate file for paired-end data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFiles {
    pub r1: PathBuf,
    pub r2: Option<PathBuf>,
}

impl ReadFiles {
    pub fn single(r1: impl Into<PathBuf>) -> Self {
        Self {
            r1: r1.into(),
            r2: None,
        }
    }

    pub fn paired(r1: impl Into<PathBuf>, r2: impl Into<PathBuf>) -> Self {
        Self {
            r1: r1.into(),
            r2: Some(r2.into()),
        }
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.r1.as_path()).chain(self.r2.as_deref())
    }
}

/// Check if the path is a gzipped file
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Streaming reader over the sequences of one FASTQ file.
pub struct SequenceReader {
    inner: fastq::io::Reader<Box<dyn BufRead>>,
}

impl SequenceReader {
    /// Open a FASTQ file, decompressing on the fly when gzipped.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let file = std::fs::File::open(path)?;

        let reader: Box<dyn BufRead> = if is_gzipped(path) {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(Self {
            inner: fastq::io::Reader::new(reader),
        })
    }

    /// Apply `f` to every read sequence, returning the number of reads seen.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Noodles` when a record cannot be parsed; FASTQ
    /// has no per-record recovery point, so a bad record rejects the file.
    pub fn try_for_each_sequence<F>(&mut self, mut f: F) -> Result<u64, ParseError>
    where
        F: FnMut(&[u8]),
    {
        let mut record = fastq::Record::default();
        let mut reads = 0;

        loop {
            let bytes = self
                .inner
                .read_record(&mut record)
                .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTQ record: {e}")))?;
            if bytes == 0 {
                return Ok(reads);
            }

            reads += 1;
            f(record.sequence());
        }
    }
}
