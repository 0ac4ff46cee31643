//! Serde model of the OBO Graphs JSON exchange format
//!
//! Covers the subset of the obographs schema the browser consumes: class
//! nodes with their labels, synonyms, and definition, plus the edge list.

use serde::Deserialize;

/// Top-level document: `{"graphs": [...]}`
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub graphs: Vec<GraphDocument>,
}

/// One graph within a document
#[derive(Debug, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub nodes: Vec<NodeDocument>,

    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

/// A node entry; only `type == "CLASS"` nodes become ontology terms
#[derive(Debug, Deserialize)]
pub struct NodeDocument {
    pub id: String,

    #[serde(default)]
    pub lbl: Option<String>,

    #[serde(default, rename = "type")]
    pub node_type: Option<String>,

    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Node metadata: definition and synonyms
#[derive(Debug, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub definition: Option<DefinitionPropertyValue>,

    #[serde(default)]
    pub synonyms: Vec<SynonymPropertyValue>,
}

#[derive(Debug, Deserialize)]
pub struct DefinitionPropertyValue {
    #[serde(default)]
    pub val: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SynonymPropertyValue {
    #[serde(default)]
    pub val: Option<String>,
}

/// A directed edge: `sub --pred--> obj`
#[derive(Debug, Deserialize)]
pub struct EdgeDocument {
    pub sub: String,
    pub pred: String,
    pub obj: String,
}
