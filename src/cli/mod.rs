//! Command-line interface for mbovis-typer.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **spoligotype**: Call the spoligotype (binary/octal signature and SB
//!   number) from raw FASTQ reads
//! - **groups**: Classify defining-SNP lineage groups from a called-variant
//!   VCF
//!
//! ## Usage
//!
//! ```text
//! # Single-end sample
//! mbovis-typer spoligotype --r1 sample_R1.fastq.gz \
//!     --spacers spacers.fasta --lineage-db spoligotype_db.txt
//!
//! # Paired-end sample, JSON output for scripting
//! mbovis-typer spoligotype --r1 R1.fastq.gz --r2 R2.fastq.gz \
//!     --spacers spacers.fasta --lineage-db spoligotype_db.txt --format json
//!
//! # Group classification
//! mbovis-typer groups --vcf sample.vcf --snp-table defining_snps.tsv
//! ```

use clap::{Parser, Subcommand};

pub mod groups;
pub mod spoligotype;

#[derive(Parser)]
#[command(name = "mbovis-typer")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Spoligotype and defining-SNP group typing for M. bovis WGS samples")]
#[command(
    long_about = "mbovis-typer types Mycobacterium bovis whole-genome-sequencing samples.\n\nThe spoligotype command counts the 43 direct-repeat spacers in the raw reads, thresholds them into a 43-bit signature, encodes the signature as 15 octal digits, and resolves the SB number against a lineage database.\n\nThe groups command filters called variants from a VCF and reports the lineage groups consistent with the sample's defining SNPs, flagging potential mixed infections."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call the spoligotype from raw FASTQ reads
    Spoligotype(spoligotype::SpoligotypeArgs),

    /// Classify defining-SNP lineage groups from a VCF
    Groups(groups::GroupsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
