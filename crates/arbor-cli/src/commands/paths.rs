//! Paths command

use clap::Args;
use std::path::PathBuf;

use crate::commands::{load_graph, resolve_root};
use crate::output::{to_json, OutputFormat};
use crate::Cli;

#[derive(Args)]
pub struct PathsArgs {
    /// OBO Graphs JSON document
    pub file: PathBuf,

    /// Term URI to list paths for
    pub uri: String,

    /// Root URI to anchor the hierarchy (defaults to the first root)
    #[arg(long)]
    pub root: Option<String>,
}

pub fn run(args: &PathsArgs, cli: &Cli) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let root_uri = resolve_root(&graph, args.root.as_deref())?;
    let hierarchy = graph.hierarchy(&root_uri)?;

    let paths = hierarchy.paths_for_node(&args.uri);
    tracing::info!("{} paths to {} under {}", paths.len(), args.uri, root_uri);

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&paths)?),
        OutputFormat::Text => {
            if paths.is_empty() {
                println!("No paths from {} to {}", root_uri, args.uri);
            }
            for path in paths {
                println!("{}", path);
            }
        }
    }

    Ok(())
}
