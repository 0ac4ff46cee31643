//! Arbor CLI - Command line interface for the ontology tree browser

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{completions, paths, roots, search, tree};

#[derive(Parser)]
#[command(name = "arbor")]
#[command(author, version, about = "Browse ontology hierarchies as partial tree views")]
pub struct Cli {
    /// Output format: text, json
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the roots of an ontology document
    Roots(roots::RootsArgs),
    /// Print a projected tree view
    Tree(tree::TreeArgs),
    /// Print every root-to-node path for a term
    Paths(paths::PathsArgs),
    /// Search terms by label, synonym, or definition
    Search(search::SearchArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting arbor CLI");

    match &cli.command {
        Commands::Roots(args) => roots::run(args, &cli)?,
        Commands::Tree(args) => tree::run(args, &cli)?,
        Commands::Paths(args) => paths::run(args, &cli)?,
        Commands::Search(args) => search::run(args, &cli)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
