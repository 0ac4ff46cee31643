//! Roots command

use clap::Args;
use std::path::PathBuf;

use crate::commands::load_graph;
use crate::output::{node_text, to_json, OutputFormat};
use crate::Cli;

#[derive(Args)]
pub struct RootsArgs {
    /// OBO Graphs JSON document
    pub file: PathBuf,
}

pub fn run(args: &RootsArgs, cli: &Cli) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let roots = graph.roots();

    tracing::info!("{} roots in {}", roots.len(), args.file.display());

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&roots)?),
        OutputFormat::Text => {
            if roots.is_empty() {
                println!("No roots found");
            }
            for root in roots {
                println!("{} ({})", node_text(root), root.uri);
            }
        }
    }

    Ok(())
}
