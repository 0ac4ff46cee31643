//! Search command

use clap::Args;
use std::path::PathBuf;

use arbor_search::{reveal, ExactSearchEngine, SearchEngine, SearchHit, SearchQuery};

use crate::commands::{load_graph, resolve_root};
use crate::output::{node_text, print_rows, to_json, OutputFormat};
use crate::Cli;

#[derive(Args)]
pub struct SearchArgs {
    /// OBO Graphs JSON document
    pub file: PathBuf,

    /// Search query
    pub query: String,

    /// Enable fuzzy search
    #[arg(long)]
    pub fuzzy: bool,

    /// Limit results
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Print the tree opened at the best hit
    #[arg(long)]
    pub reveal: bool,

    /// Root URI for --reveal (defaults to the first root)
    #[arg(long)]
    pub root: Option<String>,
}

pub fn run(args: &SearchArgs, cli: &Cli) -> anyhow::Result<()> {
    let graph = load_graph(&args.file)?;
    let query = SearchQuery::new(&args.query).with_limit(args.limit);

    let hits = if args.fuzzy {
        #[cfg(feature = "fuzzy")]
        {
            arbor_search::FuzzySearchEngine::new().search(&query, graph.nodes())?
        }
        #[cfg(not(feature = "fuzzy"))]
        {
            tracing::warn!("Fuzzy search not enabled, falling back to exact search");
            ExactSearchEngine::new().search(&query, graph.nodes())?
        }
    } else {
        ExactSearchEngine::new().search(&query, graph.nodes())?
    };

    tracing::info!("search for '{}' returned {} hits", args.query, hits.len());

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&hits)?),
        OutputFormat::Text => {
            if hits.is_empty() {
                println!("No results for '{}'", args.query);
            }
            for hit in &hits {
                let node = graph.get_node(&hit.uri)?;
                println!("{} ({}) score={}", node_text(node), hit.uri, hit.score);
            }
        }
    }

    if args.reveal {
        if let Some(best) = hits.first() {
            print_revealed(&graph, args.root.as_deref(), best)?;
        }
    }

    Ok(())
}

fn print_revealed(
    graph: &arbor_core::Graph,
    root: Option<&str>,
    hit: &SearchHit,
) -> anyhow::Result<()> {
    let root_uri = resolve_root(graph, root)?;
    let hierarchy = graph.hierarchy(&root_uri)?;

    let sets = reveal(&hierarchy, &hit.uri)?;
    let rows = hierarchy.project_flat_view(&sets.show, &sets.expand);

    println!();
    print_rows(&rows);
    Ok(())
}
