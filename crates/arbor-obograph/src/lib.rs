//! Arbor OBO Graphs loader
//!
//! Parses ontology documents in the OBO Graphs JSON exchange format into
//! the [`arbor_core::GraphNode`] list the core indexes. Only class nodes
//! are kept; `is_a` and part-of edges become parent relations.

pub mod document;
pub mod error;
pub mod loader;

pub use error::{Error, Result};
pub use loader::{load_file, parse_str};
