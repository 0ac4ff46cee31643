//! Root-anchored hierarchy index and flat tree-view projection

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::{label_cmp, GraphNode};
use crate::path::NodePath;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A resolvable reference to a node in a hierarchy
///
/// Lookups accept a URI, an already-resolved node, or a path.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Uri(&'a str),
    Node(&'a GraphNode),
    Path(&'a NodePath),
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(uri: &'a str) -> Self {
        Self::Uri(uri)
    }
}

impl<'a> From<&'a GraphNode> for NodeRef<'a> {
    fn from(node: &'a GraphNode) -> Self {
        Self::Node(node)
    }
}

impl<'a> From<&'a NodePath> for NodeRef<'a> {
    fn from(path: &'a NodePath) -> Self {
        Self::Path(path)
    }
}

/// One visible row of a projected tree view
///
/// Transient: produced per [`Hierarchy::project_flat_view`] call and never
/// stored by the core.
#[derive(Debug, Clone, Serialize)]
pub struct ViewRow<'g> {
    /// The node shown on this row
    pub item: &'g GraphNode,

    /// Predicate of the edge leading into this row; `None` for the root
    pub rel_to_parent: Option<String>,

    /// Nesting depth; the root is 0
    pub depth: usize,

    /// The route this row represents
    pub path: NodePath,
}

/// A root-anchored index over the subgraph reachable from one root
///
/// Construction performs a single exhaustive depth-first pass that visits
/// every root-to-node path exactly once: a node reachable through three
/// routes is walked three times but stored once in `nodes_by_uri`, with all
/// three routes kept in `paths_by_uri`. Read-only afterward.
pub struct Hierarchy<'g> {
    root: &'g GraphNode,
    graph: &'g Graph,
    nodes_by_uri: HashMap<String, &'g GraphNode>,
    nodes_by_path_key: HashMap<String, &'g GraphNode>,
    paths_by_uri: HashMap<String, Vec<NodePath>>,
}

impl<'g> Hierarchy<'g> {
    pub(crate) fn build(root_uri: &str, graph: &'g Graph) -> Result<Self> {
        let root = graph.get_node(root_uri)?;

        let mut hierarchy = Self {
            root,
            graph,
            nodes_by_uri: HashMap::new(),
            nodes_by_path_key: HashMap::new(),
            paths_by_uri: HashMap::new(),
        };

        let mut stack: Vec<(&GraphNode, NodePath)> =
            vec![(root, NodePath::root(&root.uri))];

        while let Some((node, path)) = stack.pop() {
            hierarchy.nodes_by_uri.insert(node.uri.clone(), node);
            hierarchy.nodes_by_path_key.insert(path.key(), node);
            hierarchy
                .paths_by_uri
                .entry(node.uri.clone())
                .or_default()
                .push(path.clone());

            for rel in graph.children_of(&node.uri) {
                // A child already on the current route means the input is
                // not the DAG the loader promised
                if path.contains(&rel.to) {
                    return Err(Error::CycleDetected(rel.to.clone()));
                }
                let child = graph.get_node(&rel.to)?;
                stack.push((child, path.child(&child.uri)));
            }
        }

        tracing::debug!(
            root = %root.uri,
            nodes = hierarchy.nodes_by_uri.len(),
            paths = hierarchy.nodes_by_path_key.len(),
            "built hierarchy index"
        );

        Ok(hierarchy)
    }

    /// The root node of this hierarchy
    pub fn root(&self) -> &'g GraphNode {
        self.root
    }

    /// The graph this hierarchy was built over
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Resolve a URI, node, or path to the node it addresses
    pub fn get_node<'a>(&self, r: impl Into<NodeRef<'a>>) -> Result<&'g GraphNode> {
        match r.into() {
            NodeRef::Uri(uri) => self
                .nodes_by_uri
                .get(uri)
                .copied()
                .ok_or_else(|| Error::NodeNotFound(uri.to_string())),
            NodeRef::Node(node) => self
                .nodes_by_uri
                .get(&node.uri)
                .copied()
                .ok_or_else(|| Error::NodeNotFound(node.uri.clone())),
            NodeRef::Path(path) => self
                .nodes_by_path_key
                .get(&path.key())
                .copied()
                .ok_or_else(|| Error::PathNotFound(path.key())),
        }
    }

    /// Every node reachable from the root, in no particular order
    pub fn items(&self) -> impl Iterator<Item = &'g GraphNode> + '_ {
        self.nodes_by_uri.values().copied()
    }

    /// Every distinct root-to-node path for a URI
    ///
    /// Empty when the node is not part of this hierarchy; a node with N
    /// convergent routes from the root has N entries.
    pub fn paths_for_node(&self, uri: &str) -> &[NodePath] {
        self.paths_by_uri
            .get(uri)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Project an ordered, depth-annotated flat view of a partially
    /// expanded tree
    ///
    /// `show` lists paths that must be visible even when their parent is
    /// collapsed; `expand` lists paths whose direct children are revealed.
    /// Pure function of the precomputed index and the two sets: only the
    /// implied subset of the hierarchy is walked, so it is cheap enough to
    /// call on every interaction. The root is always row 0.
    pub fn project_flat_view(&self, show: &[NodePath], expand: &[NodePath]) -> Vec<ViewRow<'g>> {
        let show_keys: HashSet<String> = show.iter().map(NodePath::key).collect();
        let expand_keys: HashSet<String> = expand.iter().map(NodePath::key).collect();

        // Walk into a path's children when the path itself is expanded, or
        // when something below it still has to be reached
        let walked = |path: &NodePath| {
            expand_keys.contains(&path.key())
                || expand.iter().any(|p| path.is_ancestor_of(p))
                || show.iter().any(|p| path.is_ancestor_of(p))
        };

        let shown = |path: &NodePath| {
            if path.depth() == 1 {
                return true;
            }
            if show_keys.contains(&path.key()) || expand_keys.contains(&path.key()) {
                return true;
            }
            if show.iter().any(|p| path.is_ancestor_of(p))
                || expand.iter().any(|p| path.is_ancestor_of(p))
            {
                return true;
            }
            // Direct children of an expanded path are always revealed
            path.parent()
                .map_or(false, |parent| expand_keys.contains(&parent.key()))
        };

        let mut rows = Vec::new();
        let mut stack: Vec<(&GraphNode, NodePath, usize, Option<String>)> =
            vec![(self.root, NodePath::root(&self.root.uri), 0, None)];

        while let Some((node, path, depth, rel_to_parent)) = stack.pop() {
            if shown(&path) {
                rows.push(ViewRow {
                    item: node,
                    rel_to_parent,
                    depth,
                    path: path.clone(),
                });
            }

            if !walked(&path) {
                continue;
            }

            let mut children: Vec<(&GraphNode, &str)> = self
                .graph
                .children_of(&node.uri)
                .iter()
                .filter_map(|rel| {
                    // Hierarchy construction resolved every child already
                    self.nodes_by_uri
                        .get(&rel.to)
                        .map(|&child| (child, rel.predicate.as_str()))
                })
                .collect();
            children.sort_by(|a, b| label_cmp(a.0, b.0));

            // Reverse so the LIFO stack pops in ascending label order
            for (child, predicate) in children.into_iter().rev() {
                stack.push((
                    child,
                    path.child(&child.uri),
                    depth + 1,
                    Some(predicate.to_string()),
                ));
            }
        }

        rows
    }
}
