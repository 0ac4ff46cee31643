//! Exact search engine - simple substring matching

use crate::traits::{searchable_text, Result, SearchEngine, SearchHit, SearchQuery};
use arbor_core::GraphNode;

/// Simple case-insensitive substring search engine (stateless)
///
/// Label matches outrank synonym and definition matches.
pub struct ExactSearchEngine;

impl ExactSearchEngine {
    pub fn new() -> Self {
        Self
    }

    fn score_node(node: &GraphNode, needle: &str) -> Option<u32> {
        let label_hit = node
            .label
            .as_deref()
            .map_or(false, |l| l.to_lowercase().contains(needle));
        if label_hit {
            return Some(2);
        }

        let text_hit = searchable_text(node).to_lowercase().contains(needle);
        text_hit.then_some(1)
    }
}

impl Default for ExactSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine for ExactSearchEngine {
    fn search(&self, query: &SearchQuery, nodes: &[GraphNode]) -> Result<Vec<SearchHit>> {
        let needle = query.text.to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<SearchHit> = nodes
            .iter()
            .filter_map(|node| {
                Self::score_node(node, &needle).map(|score| SearchHit {
                    uri: node.uri.clone(),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(query.limit);

        tracing::debug!("exact search for '{}' matched {} nodes", query.text, hits.len());

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nodes() -> Vec<GraphNode> {
        vec![
            GraphNode::new("ZFA:0001").with_label("pectoral fin"),
            GraphNode::new("ZFA:0002")
                .with_label("dorsal organ")
                .with_synonym("fin fold"),
            GraphNode::new("ZFA:0003").with_label("eye"),
        ]
    }

    #[test]
    fn test_label_matches_outrank_synonyms() {
        let engine = ExactSearchEngine::new();
        let hits = engine
            .search(&SearchQuery::new("fin"), &sample_nodes())
            .unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].uri, "ZFA:0001");
        assert_eq!(hits[1].uri, "ZFA:0002");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let engine = ExactSearchEngine::new();
        let hits = engine
            .search(&SearchQuery::new("EYE"), &sample_nodes())
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].uri, "ZFA:0003");
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let engine = ExactSearchEngine::new();
        let hits = engine
            .search(&SearchQuery::new(""), &sample_nodes())
            .unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_limit_is_applied() {
        let engine = ExactSearchEngine::new();
        let hits = engine
            .search(&SearchQuery::new("fin").with_limit(1), &sample_nodes())
            .unwrap();
        assert_eq!(hits.len(), 1);
    }
}
