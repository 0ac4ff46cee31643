//! Bidirectional adjacency index over an ontology graph

use crate::error::{Error, Result};
use crate::hierarchy::Hierarchy;
use crate::node::{label_cmp, GraphNode, Relation};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// An indexed, immutable ontology graph
///
/// Built once from a complete node list. Every declared edge becomes
/// reachable in both directions through `children_by_uri`/`parents_by_uri`,
/// regardless of which side the source document declared it from.
///
/// The relation graph is expected to be acyclic; that precondition is owned
/// by the loading layer. Traversals carry a guard that fails fast with
/// [`Error::CycleDetected`] instead of looping when it is violated.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    index_by_uri: HashMap<String, usize>,
    children_by_uri: HashMap<String, Vec<Relation>>,
    parents_by_uri: HashMap<String, Vec<Relation>>,
    roots: Vec<String>,
}

impl Graph {
    /// Index a complete node list in one linear pass
    pub fn new(nodes: Vec<GraphNode>) -> Self {
        let mut index_by_uri = HashMap::with_capacity(nodes.len());
        let mut children_by_uri: HashMap<String, Vec<Relation>> = HashMap::new();
        let mut parents_by_uri: HashMap<String, Vec<Relation>> = HashMap::new();

        for (i, node) in nodes.iter().enumerate() {
            index_by_uri.insert(node.uri.clone(), i);

            for (predicate, child_uris) in &node.children {
                for child_uri in child_uris {
                    children_by_uri
                        .entry(node.uri.clone())
                        .or_default()
                        .push(Relation {
                            to: child_uri.clone(),
                            predicate: predicate.clone(),
                            inverse: false,
                        });
                    parents_by_uri
                        .entry(child_uri.clone())
                        .or_default()
                        .push(Relation {
                            to: node.uri.clone(),
                            predicate: predicate.clone(),
                            inverse: true,
                        });
                }
            }

            for (predicate, parent_uris) in &node.parents {
                for parent_uri in parent_uris {
                    parents_by_uri
                        .entry(node.uri.clone())
                        .or_default()
                        .push(Relation {
                            to: parent_uri.clone(),
                            predicate: predicate.clone(),
                            inverse: false,
                        });
                    children_by_uri
                        .entry(parent_uri.clone())
                        .or_default()
                        .push(Relation {
                            to: node.uri.clone(),
                            predicate: predicate.clone(),
                            inverse: true,
                        });
                }
            }
        }

        // A root has no parents and at least one child; isolated nodes are
        // not browsable roots.
        let roots: Vec<String> = nodes
            .iter()
            .filter(|node| {
                parents_by_uri.get(&node.uri).map_or(true, Vec::is_empty)
                    && children_by_uri.get(&node.uri).is_some_and(|c| !c.is_empty())
            })
            .map(|node| node.uri.clone())
            .collect();

        tracing::debug!(
            nodes = nodes.len(),
            roots = roots.len(),
            "indexed ontology graph"
        );

        Self {
            nodes,
            index_by_uri,
            children_by_uri,
            parents_by_uri,
            roots,
        }
    }

    /// All nodes, in input order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Root nodes, in input order
    pub fn roots(&self) -> Vec<&GraphNode> {
        self.roots
            .iter()
            .filter_map(|uri| self.index_by_uri.get(uri).map(|&i| &self.nodes[i]))
            .collect()
    }

    /// Look up a node by URI
    pub fn get_node(&self, uri: &str) -> Result<&GraphNode> {
        self.index_by_uri
            .get(uri)
            .map(|&i| &self.nodes[i])
            .ok_or_else(|| Error::NodeNotFound(uri.to_string()))
    }

    /// Child relations of a node (empty when it has none)
    pub fn children_of(&self, uri: &str) -> &[Relation] {
        self.children_by_uri
            .get(uri)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Parent relations of a node (empty when it has none)
    pub fn parents_of(&self, uri: &str) -> &[Relation] {
        self.parents_by_uri
            .get(uri)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All ancestors of `node`, breadth-first, label-sorted per frontier node
    ///
    /// The start node is excluded. A node reachable through several routes is
    /// emitted once per route; this matches the path multiplicity kept by
    /// [`Hierarchy::paths_for_node`].
    pub fn find_all_parents(&self, node: &GraphNode) -> Result<Vec<&GraphNode>> {
        self.collect_reachable(node, |uri| self.parents_of(uri))
    }

    /// All descendants of `node`, breadth-first, label-sorted per frontier node
    ///
    /// Same exclusion and multiplicity behavior as [`Graph::find_all_parents`].
    pub fn find_all_children(&self, node: &GraphNode) -> Result<Vec<&GraphNode>> {
        self.collect_reachable(node, |uri| self.children_of(uri))
    }

    fn collect_reachable<'g>(
        &'g self,
        start: &GraphNode,
        neighbors: impl Fn(&str) -> &'g [Relation],
    ) -> Result<Vec<&'g GraphNode>> {
        let mut reached = Vec::new();
        let mut queue: VecDeque<(&GraphNode, usize)> = VecDeque::new();
        queue.push_back((self.get_node(&start.uri)?, 0));

        while let Some((node, distance)) = queue.pop_front() {
            // An acyclic graph cannot have a route longer than the node count
            if distance > self.nodes.len() {
                return Err(Error::CycleDetected(node.uri.clone()));
            }

            if distance > 0 {
                reached.push(node);
            }

            let mut next: Vec<&GraphNode> = neighbors(&node.uri)
                .iter()
                .map(|rel| self.get_node(&rel.to))
                .collect::<Result<_>>()?;
            next.sort_by(|a, b| label_cmp(a, b));

            for neighbor in next {
                queue.push_back((neighbor, distance + 1));
            }
        }

        Ok(reached)
    }

    /// Build the hierarchy anchored at the given root URI
    pub fn hierarchy(&self, root_uri: &str) -> Result<Hierarchy<'_>> {
        Hierarchy::build(root_uri, self)
    }

    /// Build one hierarchy per discovered root, keyed by root URI
    ///
    /// Eager: cost is proportional to the reachable edges of every root. For
    /// many large forests prefer calling [`Graph::hierarchy`] per root on
    /// first access.
    pub fn root_hierarchies(&self) -> Result<BTreeMap<String, Hierarchy<'_>>> {
        self.roots
            .iter()
            .map(|uri| Ok((uri.clone(), self.hierarchy(uri)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A(root) -> {B, C}, C -> {D}, E under both A and B.
    // Edges are declared from the child side, as an ontology loader would.
    fn sample_nodes() -> Vec<GraphNode> {
        vec![
            GraphNode::new("A").with_label("alpha"),
            GraphNode::new("B")
                .with_label("bravo")
                .with_parent("is-a", "A"),
            GraphNode::new("C")
                .with_label("charlie")
                .with_parent("is-a", "A"),
            GraphNode::new("D")
                .with_label("delta")
                .with_parent("is-a", "C"),
            GraphNode::new("E")
                .with_label("echo")
                .with_parent("is-a", "A")
                .with_parent("is-a", "B"),
        ]
    }

    #[test]
    fn test_roots_require_children_and_no_parents() {
        let mut nodes = sample_nodes();
        nodes.push(GraphNode::new("isolated").with_label("island"));
        let graph = Graph::new(nodes);

        let roots: Vec<&str> = graph.roots().iter().map(|n| n.uri.as_str()).collect();
        assert_eq!(roots, vec!["A"]);
    }

    #[test]
    fn test_edges_reachable_from_both_sides() {
        let graph = Graph::new(sample_nodes());

        // Declared via B's parents, so the parent entry is the direct one
        let parents = graph.parents_of("B");
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].to, "A");
        assert_eq!(parents[0].predicate, "is-a");
        assert!(!parents[0].inverse);

        // ...and the mirror entry on A's children map is marked inverse
        let down = graph
            .children_of("A")
            .iter()
            .find(|rel| rel.to == "B")
            .unwrap();
        assert_eq!(down.predicate, "is-a");
        assert!(down.inverse);
    }

    #[test]
    fn test_child_declared_edges_mirror_too() {
        let graph = Graph::new(vec![
            GraphNode::new("P").with_label("p").with_child("part-of", "Q"),
            GraphNode::new("Q").with_label("q"),
        ]);

        assert!(!graph.children_of("P")[0].inverse);
        let up = &graph.parents_of("Q")[0];
        assert_eq!(up.to, "P");
        assert!(up.inverse);
    }

    #[test]
    fn test_get_node_not_found() {
        let graph = Graph::new(sample_nodes());
        assert!(matches!(
            graph.get_node("missing"),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_find_all_children_breadth_first_sorted() {
        let graph = Graph::new(sample_nodes());
        let root = graph.get_node("A").unwrap();

        let uris: Vec<&str> = graph
            .find_all_children(root)
            .unwrap()
            .iter()
            .map(|n| n.uri.as_str())
            .collect();

        // Distance 1 sorted by label: B, C, E; distance 2: E (via B), D.
        // E is emitted once per route -- multiplicity is preserved.
        assert_eq!(uris, vec!["B", "C", "E", "E", "D"]);
    }

    #[test]
    fn test_find_all_parents_excludes_start() {
        let graph = Graph::new(sample_nodes());
        let e = graph.get_node("E").unwrap();

        let uris: Vec<&str> = graph
            .find_all_parents(e)
            .unwrap()
            .iter()
            .map(|n| n.uri.as_str())
            .collect();

        assert!(!uris.contains(&"E"));
        assert_eq!(uris, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_cycle_fails_fast() {
        let graph = Graph::new(vec![
            GraphNode::new("X").with_label("x").with_parent("is-a", "Y"),
            GraphNode::new("Y").with_label("y").with_parent("is-a", "X"),
        ]);

        let x = graph.get_node("X").unwrap();
        assert!(matches!(
            graph.find_all_parents(x),
            Err(Error::CycleDetected(_))
        ));
    }
}
