use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::signature::DEFAULT_CALL_THRESHOLD;
use crate::matching::fuzzy::DEFAULT_MAX_MISMATCHES;
use crate::matching::FuzzyMatcher;
use crate::parsing::fastq::ReadFiles;
use crate::reference::{LineageTable, SpacerReference};
use crate::typing::{SpoligotypeCaller, SpoligotypeRecord};

#[derive(Args)]
pub struct SpoligotypeArgs {
    /// First (or only) FASTQ read file, plain or gzipped
    #[arg(long = "r1", value_name = "FASTQ")]
    pub r1: PathBuf,

    /// Optional mate read file for paired-end samples
    #[arg(long = "r2", value_name = "FASTQ")]
    pub r2: Option<PathBuf>,

    /// Spacer reference FASTA (43 records)
    #[arg(long, value_name = "FASTA")]
    pub spacers: PathBuf,

    /// Lineage lookup table (id, SB label, binary code per row)
    #[arg(long = "lineage-db", value_name = "TABLE")]
    pub lineage_db: PathBuf,

    /// Presence threshold: counts strictly greater are called present
    #[arg(long, default_value_t = DEFAULT_CALL_THRESHOLD)]
    pub threshold: u64,

    /// Substitutions tolerated per spacer occurrence
    #[arg(long, default_value_t = DEFAULT_MAX_MISMATCHES)]
    pub max_mismatches: u32,
}

/// Execute spoligotype subcommand
///
/// # Errors
///
/// Returns an error if the reference data cannot be loaded or the reads
/// cannot be scanned.
pub fn run(args: SpoligotypeArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let spacers = SpacerReference::load_from_file(&args.spacers)?;
    let lineages = LineageTable::load_from_file(&args.lineage_db)?;

    if verbose {
        eprintln!(
            "Loaded {} spacers and {} lineage records",
            spacers.len(),
            lineages.len()
        );
    }

    let reads = match args.r2 {
        Some(r2) => ReadFiles::paired(args.r1, r2),
        None => ReadFiles::single(args.r1),
    };

    let matcher = FuzzyMatcher::new(args.max_mismatches);
    let caller = SpoligotypeCaller::new(&spacers, &lineages).with_threshold(args.threshold);
    let record = caller.type_reads(&matcher, &reads)?;

    match format {
        OutputFormat::Text => print_text(&record, args.threshold),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
    }

    Ok(())
}

fn print_text(record: &SpoligotypeRecord, threshold: u64) {
    println!("Spacer counts: {}", record.counts.colon_joined());
    println!("Binary code (threshold > {threshold}): {}", record.binary);
    println!("Octal code: {}", record.octal);
    println!("SB number: {}", record.sb);
}
