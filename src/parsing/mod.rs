//! Parsers for the reference inputs and per-sample files.
//!
//! This module provides parsers for:
//!
//! - **Spacer FASTA**: the 43-spacer reference set (plain or gzipped)
//! - **FASTQ reads**: raw sequencing reads, single- or paired-end
//! - **VCF records**: called variants reduced to [`VariantCall`]s
//! - **Lineage table**: whitespace-delimited `id  SB-label  binary-code` rows
//! - **Defining-SNP table**: two tab-separated rows of positions and groups
//!
//! Error policy follows the taxonomy of the surrounding pipeline: a
//! malformed *record* is skipped with a `warn!` log line; an unreadable or
//! structurally corrupt *file* is a [`ParseError`] the caller decides how to
//! surface (fatal for reference data, sentinel result for per-sample data).
//!
//! [`VariantCall`]: crate::core::variant::VariantCall

use thiserror::Error;

pub mod fasta;
pub mod fastq;
pub mod lineage;
pub mod snp_table;
pub mod vcf;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}
