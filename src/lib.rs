//! # mbovis-typer
//!
//! A library for typing *Mycobacterium bovis* whole-genome-sequencing
//! samples by spoligotype and defining-SNP lineage group.
//!
//! Spoligotyping fingerprints an isolate by which of 43 known direct-repeat
//! spacers its genome carries. The raw reads are scanned for each spacer
//! (tolerating one substitution, both orientations), the per-spacer counts
//! are thresholded into a 43-bit presence/absence signature, the signature
//! is rendered as 15 octal digits, and the binary code is looked up in a
//! reference database of known SB numbers.
//!
//! Group classification reads the sample's called variants and intersects
//! them with a curated table of group-defining SNP positions, including
//! inverted positions (absence implies the group) and masked positions
//! (never considered), flagging potential mixed infections.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mbovis_typer::{FuzzyMatcher, LineageTable, SpacerReference, SpoligotypeCaller};
//! use mbovis_typer::parsing::fastq::ReadFiles;
//! use std::path::Path;
//!
//! // Reference data is loaded once and passed by reference
//! let spacers = SpacerReference::load_from_file(Path::new("spacers.fasta")).unwrap();
//! let lineages = LineageTable::load_from_file(Path::new("spoligotype_db.txt")).unwrap();
//!
//! let caller = SpoligotypeCaller::new(&spacers, &lineages);
//! let record = caller
//!     .type_reads(&FuzzyMatcher::default(), &ReadFiles::single("sample_R1.fastq.gz"))
//!     .unwrap();
//!
//! println!("{} {} {}", record.binary, record.octal, record.sb);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for counts, signatures, and variant calls
//! - [`reference`]: Immutable reference tables loaded once per process
//! - [`matching`]: Pluggable approximate spacer matching
//! - [`parsing`]: Parsers for FASTA, FASTQ, VCF, and the reference tables
//! - [`typing`]: Per-sample spoligotype and group-classification pipelines
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod reference;
pub mod typing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::signature::{BinarySignature, OctalCode, SpacerCounts};
pub use crate::core::types::{SbResolution, SpacerId};
pub use crate::core::variant::{CallFilter, CallSets, VariantCall};
pub use crate::matching::{FuzzyMatcher, SpacerMatcher};
pub use crate::reference::{DefiningSnpTable, LineageTable, SpacerReference};
pub use crate::typing::{GroupCall, GroupClassifier, SpoligotypeCaller, SpoligotypeRecord};
