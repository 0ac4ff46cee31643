//! Root-to-node paths and their canonical keys

use crate::error::{Error, Result};
use serde::Serialize;

/// An immutable, order-sensitive route from a hierarchy's root to a node
///
/// The first step is always the root URI and the last step is the addressed
/// node. A node reachable through several ancestor branches has one distinct
/// `NodePath` per route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NodePath {
    steps: Vec<String>,
}

impl NodePath {
    /// Create a path from an ordered step sequence
    ///
    /// Fails with [`Error::EmptyPath`] when `steps` is empty.
    pub fn new(steps: Vec<String>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::EmptyPath);
        }
        Ok(Self { steps })
    }

    /// Create the single-step path addressing a root
    pub fn root(uri: impl Into<String>) -> Self {
        Self {
            steps: vec![uri.into()],
        }
    }

    /// Canonical key for use in sets and maps
    ///
    /// The key is the JSON array encoding of the steps; [`NodePath::from_key`]
    /// is its inverse.
    pub fn key(&self) -> String {
        // A vector of strings always encodes
        serde_json::to_string(&self.steps).expect("path steps encode as JSON")
    }

    /// Parse a canonical key back into a path
    pub fn from_key(key: &str) -> Result<Self> {
        let steps: Vec<String> = serde_json::from_str(key)?;
        Self::new(steps)
    }

    /// The ordered step URIs
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Number of steps (the root path has depth 1)
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// The final step: the URI of the addressed node
    pub fn leaf(&self) -> &str {
        // Construction rejects empty step sequences
        self.steps.last().expect("paths are never empty")
    }

    /// Whether `uri` occurs anywhere along this path
    pub fn contains(&self, uri: &str) -> bool {
        self.steps.iter().any(|step| step == uri)
    }

    /// Strict ancestry: true only for a strictly shorter proper prefix
    ///
    /// A path is never its own ancestor.
    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        if self.steps.len() >= other.steps.len() {
            return false;
        }
        self.steps
            .iter()
            .zip(&other.steps)
            .all(|(a, b)| a == b)
    }

    /// Whether this path equals `other` or descends from it
    pub fn starts_with(&self, other: &NodePath) -> bool {
        other.is_ancestor_of(self) || other == self
    }

    /// The path one step shorter, or `None` for a root path
    pub fn parent(&self) -> Option<NodePath> {
        if self.steps.len() <= 1 {
            return None;
        }
        Some(Self {
            steps: self.steps[..self.steps.len() - 1].to_vec(),
        })
    }

    /// A new path extended by one step
    pub fn child(&self, uri: impl Into<String>) -> NodePath {
        let mut steps = self.steps.clone();
        steps.push(uri.into());
        Self { steps }
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steps.join(" > "))
    }
}
