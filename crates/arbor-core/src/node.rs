//! Node (ontology term) types and label ordering

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A text value carried on a node (synonym or definition)
///
/// Opaque to the core: it is stored and handed back to consumers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    pub value: String,
}

impl TextValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A node in the ontology graph (an entity/term)
///
/// Nodes are supplied once, as a complete list, when the [`Graph`] is
/// constructed and are never mutated afterward.
///
/// [`Graph`]: crate::graph::Graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique, stable identifier
    pub uri: String,

    /// Display text, when the source document provides one
    pub label: Option<String>,

    /// Synonym text values
    #[serde(default)]
    pub synonyms: Vec<TextValue>,

    /// Definition text values
    #[serde(default)]
    pub definitions: Vec<TextValue>,

    /// Declared child relations: predicate URI -> child node URIs
    #[serde(default)]
    pub children: BTreeMap<String, Vec<String>>,

    /// Declared parent relations: predicate URI -> parent node URIs
    #[serde(default)]
    pub parents: BTreeMap<String, Vec<String>>,
}

impl GraphNode {
    /// Create a new node with the given URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            label: None,
            synonyms: Vec::new(),
            definitions: Vec::new(),
            children: BTreeMap::new(),
            parents: BTreeMap::new(),
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Declare a child relation under the given predicate
    pub fn with_child(mut self, predicate: impl Into<String>, uri: impl Into<String>) -> Self {
        self.children
            .entry(predicate.into())
            .or_default()
            .push(uri.into());
        self
    }

    /// Declare a parent relation under the given predicate
    pub fn with_parent(mut self, predicate: impl Into<String>, uri: impl Into<String>) -> Self {
        self.parents
            .entry(predicate.into())
            .or_default()
            .push(uri.into());
        self
    }

    /// Add a synonym text value
    pub fn with_synonym(mut self, value: impl Into<String>) -> Self {
        self.synonyms.push(TextValue::new(value));
        self
    }

    /// Add a definition text value
    pub fn with_definition(mut self, value: impl Into<String>) -> Self {
        self.definitions.push(TextValue::new(value));
        self
    }
}

/// A directed relation between two nodes, reachable from either side
///
/// Derived at [`Graph`] construction, never stored on the node itself. For
/// every declared edge a mirror entry is synthesized on the reverse map;
/// `inverse` is `true` on the mirror entry (the traversal runs against the
/// direction the source document declared).
///
/// [`Graph`]: crate::graph::Graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// URI of the neighbor node
    pub to: String,

    /// Predicate URI of the edge (e.g. "rdfs:subClassOf")
    pub predicate: String,

    /// Whether this entry mirrors an edge declared from the other side
    pub inverse: bool,
}

/// Order nodes by display label.
///
/// Nodes without a label sort before labelled ones; labelled nodes compare
/// case-folded. Returns `Equal` for ties so a stable sort preserves the
/// original order.
pub fn label_cmp(a: &GraphNode, b: &GraphNode) -> Ordering {
    match (a.label.as_deref(), b.label.as_deref()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = GraphNode::new("ex:leaf")
            .with_label("Leaf")
            .with_parent("is-a", "ex:plant")
            .with_synonym("frond");

        assert_eq!(node.uri, "ex:leaf");
        assert_eq!(node.label.as_deref(), Some("Leaf"));
        assert_eq!(node.parents["is-a"], vec!["ex:plant"]);
        assert_eq!(node.synonyms[0].value, "frond");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_label_cmp_unlabelled_first() {
        let unlabelled = GraphNode::new("ex:a");
        let labelled = GraphNode::new("ex:b").with_label("B");

        assert_eq!(label_cmp(&unlabelled, &labelled), Ordering::Less);
        assert_eq!(label_cmp(&labelled, &unlabelled), Ordering::Greater);
        assert_eq!(label_cmp(&unlabelled, &unlabelled), Ordering::Equal);
    }

    #[test]
    fn test_label_cmp_case_folded() {
        let a = GraphNode::new("ex:a").with_label("apple");
        let b = GraphNode::new("ex:b").with_label("Banana");

        assert_eq!(label_cmp(&a, &b), Ordering::Less);
    }
}
