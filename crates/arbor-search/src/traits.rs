//! Search engine traits and query types

use arbor_core::GraphNode;
use serde::{Deserialize, Serialize};

pub use crate::error::{SearchError, SearchResult as Result};

/// Search query over ontology terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text to match against labels, synonyms, and definitions
    pub text: String,

    /// Maximum hits to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

impl SearchQuery {
    /// Create a new query with text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: default_limit(),
        }
    }

    /// Set the maximum number of hits
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Result from search including score
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub uri: String,
    pub score: u32,
}

/// Trait for search engines
///
/// Engines are stateless: they score a node list per call, which keeps them
/// as pure over the immutable graph as the core's view projection is.
pub trait SearchEngine {
    /// Search nodes, returning hits ranked by descending score
    fn search(&self, query: &SearchQuery, nodes: &[GraphNode]) -> Result<Vec<SearchHit>>;
}

/// Join the text fields an engine matches against
pub(crate) fn searchable_text(node: &GraphNode) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(label) = node.label.as_deref() {
        parts.push(label);
    }
    parts.extend(node.synonyms.iter().map(|s| s.value.as_str()));
    parts.extend(node.definitions.iter().map(|d| d.value.as_str()));
    parts.join(" ")
}
