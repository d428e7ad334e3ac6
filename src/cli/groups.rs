use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::reference::DefiningSnpTable;
use crate::typing::GroupClassifier;

#[derive(Args)]
pub struct GroupsArgs {
    /// Called-variant VCF for the sample
    #[arg(long, value_name = "VCF")]
    pub vcf: PathBuf,

    /// Defining-SNP position table
    #[arg(long = "snp-table", value_name = "TABLE")]
    pub snp_table: PathBuf,
}

/// Execute groups subcommand
///
/// # Errors
///
/// Returns an error if the defining-SNP table cannot be loaded. Problems
/// with the sample VCF itself degrade to a sentinel result instead.
pub fn run(args: GroupsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let table = DefiningSnpTable::load_from_file(&args.snp_table)?;

    if verbose {
        eprintln!(
            "Loaded defining-SNP table with {} positions ({} normal, {} inverted)",
            table.len(),
            table.normal().len(),
            table.inverted().len()
        );
    }

    let classifier = GroupClassifier::new(&table);
    let call = classifier.classify_vcf(&args.vcf);

    match format {
        OutputFormat::Text => println!("{call}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&call)?),
    }

    Ok(())
}
