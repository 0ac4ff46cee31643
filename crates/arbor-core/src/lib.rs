//! Arbor Core - Graph index and tree-view projection engine
//!
//! Indexes a directed, possibly multi-parented, acyclic ontology graph and
//! produces on-demand, partially expanded flat tree views of it. The three
//! layers, bottom up: [`NodePath`] (canonical route identifiers),
//! [`Graph`] (bidirectional adjacency and roots), and [`Hierarchy`]
//! (per-root path index plus the [`Hierarchy::project_flat_view`] query).
//!
//! Loading source documents, search, and rendering are collaborators built
//! on top of this crate, not part of it.

pub mod error;
pub mod graph;
pub mod hierarchy;
pub mod node;
pub mod path;

pub use error::{Error, Result};
pub use graph::Graph;
pub use hierarchy::{Hierarchy, NodeRef, ViewRow};
pub use node::{label_cmp, GraphNode, Relation, TextValue};
pub use path::NodePath;
