//! CLI command implementations

pub mod completions;
pub mod paths;
pub mod roots;
pub mod search;
pub mod tree;

use anyhow::Context;
use arbor_core::Graph;
use std::path::Path;

/// Load an OBO Graphs document and index it
pub fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    let nodes = arbor_obograph::load_file(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    Ok(Graph::new(nodes))
}

/// Resolve the root URI to browse: the explicit choice, or the document's
/// first root
pub fn resolve_root(graph: &Graph, requested: Option<&str>) -> anyhow::Result<String> {
    if let Some(uri) = requested {
        return Ok(graph.get_node(uri)?.uri.clone());
    }
    graph
        .roots()
        .first()
        .map(|node| node.uri.clone())
        .ok_or_else(|| anyhow::anyhow!("document has no roots"))
}
