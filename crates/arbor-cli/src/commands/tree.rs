//! Tree view command

use clap::Args;
use std::path::PathBuf;

use arbor_core::NodePath;

use crate::commands::{load_graph, resolve_root};
use crate::output::{print_rows, to_json, OutputFormat};
use crate::Cli;

#[derive(Args)]
pub struct TreeArgs {
    /// OBO Graphs JSON document
    pub file: PathBuf,

    /// Root URI to browse (defaults to the document's first root)
    #[arg(long)]
    pub root: Option<String>,

    /// Path key to expand (can be used multiple times)
    #[arg(long)]
    pub expand: Vec<String>,

    /// Path key to show (can be used multiple times)
    #[arg(long)]
    pub show: Vec<String>,
}

fn parse_keys(keys: &[String]) -> anyhow::Result<Vec<NodePath>> {
    keys.iter()
        .map(|key| Ok(NodePath::from_key(key)?))
        .collect()
}

pub fn run(args: &TreeArgs, cli: &Cli) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let root_uri = resolve_root(&graph, args.root.as_deref())?;
    let hierarchy = graph.hierarchy(&root_uri)?;

    let show = parse_keys(&args.show)?;
    let expand = parse_keys(&args.expand)?;

    let rows = hierarchy.project_flat_view(&show, &expand);
    tracing::info!("projected {} rows under {}", rows.len(), root_uri);

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&rows)?),
        OutputFormat::Text => print_rows(&rows),
    }

    Ok(())
}
