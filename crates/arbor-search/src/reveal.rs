//! Deriving show/expand path sets that reveal a search hit
//!
//! The UI flow for "open the tree at this result": look up every path to
//! the node, show the paths themselves, and expand all their strict
//! ancestors so each route is opened down to the hit. The resulting sets
//! feed straight into [`Hierarchy::project_flat_view`].
//!
//! [`Hierarchy::project_flat_view`]: arbor_core::Hierarchy::project_flat_view

use crate::error::{SearchError, SearchResult};
use arbor_core::{Error, Hierarchy, NodePath};
use std::collections::HashSet;

/// Path sets that make a node visible in a projected view
#[derive(Debug, Clone, Default)]
pub struct RevealSets {
    pub show: Vec<NodePath>,
    pub expand: Vec<NodePath>,
}

/// Compute the show/expand sets revealing every route to `uri`
pub fn reveal(hierarchy: &Hierarchy<'_>, uri: &str) -> SearchResult<RevealSets> {
    let paths = hierarchy.paths_for_node(uri);
    if paths.is_empty() {
        return Err(SearchError::Core(Error::NodeNotFound(uri.to_string())));
    }

    let mut sets = RevealSets::default();
    let mut seen: HashSet<String> = HashSet::new();

    for path in paths {
        sets.show.push(path.clone());

        let mut ancestor = path.parent();
        while let Some(current) = ancestor {
            if seen.insert(current.key()) {
                sets.expand.push(current.clone());
            }
            ancestor = current.parent();
        }
    }

    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::{Graph, GraphNode};

    // A(root) -> {B, C}, E under both A and B
    fn sample_graph() -> Graph {
        Graph::new(vec![
            GraphNode::new("A").with_label("alpha"),
            GraphNode::new("B")
                .with_label("bravo")
                .with_parent("is-a", "A"),
            GraphNode::new("C")
                .with_label("charlie")
                .with_parent("is-a", "A"),
            GraphNode::new("E")
                .with_label("echo")
                .with_parent("is-a", "A")
                .with_parent("is-a", "B"),
        ])
    }

    #[test]
    fn test_reveal_covers_every_route() {
        let graph = sample_graph();
        let hierarchy = graph.hierarchy("A").unwrap();

        let sets = reveal(&hierarchy, "E").unwrap();

        assert_eq!(sets.show.len(), 2);
        let mut expand_keys: Vec<String> = sets.expand.iter().map(NodePath::key).collect();
        expand_keys.sort();
        // Ancestors of [A,E] and [A,B,E], deduplicated: [A] and [A,B]
        assert_eq!(expand_keys.len(), 2);

        // The projection driven by these sets surfaces E on both routes
        let rows = hierarchy.project_flat_view(&sets.show, &sets.expand);
        let e_rows = rows.iter().filter(|r| r.item.uri == "E").count();
        assert_eq!(e_rows, 2);
    }

    #[test]
    fn test_reveal_unknown_node_fails() {
        let graph = sample_graph();
        let hierarchy = graph.hierarchy("A").unwrap();

        assert!(reveal(&hierarchy, "nope").is_err());
    }
}
