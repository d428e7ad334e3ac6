use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod matching;
mod parsing;
mod reference;
mod typing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("mbovis_typer=debug,info")
    } else {
        EnvFilter::new("mbovis_typer=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Spoligotype(args) => {
            cli::spoligotype::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Groups(args) => {
            cli::groups::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
