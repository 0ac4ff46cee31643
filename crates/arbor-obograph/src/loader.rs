//! Conversion from OBO Graphs documents to Arbor graph nodes

use crate::document::{Document, GraphDocument};
use crate::error::{Error, Result};
use arbor_core::GraphNode;
use std::collections::BTreeMap;
use std::path::Path;

/// Predicates treated as parent relations, mapped to the identifiers the
/// browser displays
fn parent_predicate(pred: &str) -> Option<&'static str> {
    match pred {
        "is_a" => Some("rdfs:subClassOf"),
        "http://purl.obolibrary.org/obo/BFO_0000050" => Some("BFO:0000050"),
        _ => None,
    }
}

/// Parse an OBO Graphs JSON string into graph nodes
///
/// Uses the first graph in the document; fails with [`Error::NoGraphs`]
/// when there is none.
pub fn parse_str(json: &str) -> Result<Vec<GraphNode>> {
    let document: Document = serde_json::from_str(json)?;
    let graph = document.graphs.into_iter().next().ok_or(Error::NoGraphs)?;
    Ok(convert_graph(graph))
}

/// Read and parse an OBO Graphs JSON file
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<GraphNode>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_str(&json)
}

fn convert_graph(graph: GraphDocument) -> Vec<GraphNode> {
    let mut terms: BTreeMap<String, GraphNode> = BTreeMap::new();
    let mut order: Vec<String> = Vec::new();

    for node in graph.nodes {
        if node.node_type.as_deref() != Some("CLASS") {
            continue;
        }

        let mut term = GraphNode::new(&node.id);
        term.label = node.lbl;

        if let Some(meta) = node.meta {
            if let Some(val) = meta.definition.and_then(|d| d.val) {
                term = term.with_definition(val);
            }
            for synonym in meta.synonyms {
                if let Some(val) = synonym.val {
                    term = term.with_synonym(val);
                }
            }
        }

        order.push(node.id.clone());
        terms.insert(node.id, term);
    }

    let mut skipped = 0usize;
    for edge in &graph.edges {
        let Some(predicate) = parent_predicate(&edge.pred) else {
            continue;
        };
        match terms.get_mut(&edge.sub) {
            Some(term) => term
                .parents
                .entry(predicate.to_string())
                .or_default()
                .push(edge.obj.clone()),
            // Edges from non-class or unknown subjects carry no term
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "dropped edges with unknown subjects");
    }
    tracing::debug!(
        graph = graph.id.as_deref().unwrap_or("<unnamed>"),
        terms = order.len(),
        edges = graph.edges.len(),
        "loaded OBO graph"
    );

    // Hand nodes back in document order
    order
        .into_iter()
        .filter_map(|id| terms.remove(&id))
        .collect()
}
