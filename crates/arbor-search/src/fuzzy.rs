//! Fuzzy search using nucleo

use nucleo_matcher::{
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
    Config, Matcher,
};

use crate::traits::{searchable_text, Result, SearchEngine, SearchHit, SearchQuery};
use arbor_core::GraphNode;

/// Stateless fuzzy search engine using nucleo
pub struct FuzzySearchEngine;

impl FuzzySearchEngine {
    pub fn new() -> Self {
        Self
    }

    fn score_node(node: &GraphNode, pattern: &Pattern, matcher: &mut Matcher) -> Option<u32> {
        let searchable = searchable_text(node);
        let mut buf = Vec::new();
        pattern.score(
            nucleo_matcher::Utf32Str::new(&searchable, &mut buf),
            matcher,
        )
    }
}

impl Default for FuzzySearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine for FuzzySearchEngine {
    fn search(&self, query: &SearchQuery, nodes: &[GraphNode]) -> Result<Vec<SearchHit>> {
        if query.text.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = Pattern::new(
            &query.text,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);

        let mut hits: Vec<SearchHit> = nodes
            .iter()
            .filter_map(|node| {
                Self::score_node(node, &pattern, &mut matcher).map(|score| SearchHit {
                    uri: node.uri.clone(),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(query.limit);

        tracing::debug!("fuzzy search for '{}' matched {} nodes", query.text, hits.len());

        Ok(hits)
    }
}
