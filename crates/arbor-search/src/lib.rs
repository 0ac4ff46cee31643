//! Arbor Search - Search engines for ontology terms
//!
//! Provides exact substring search, fuzzy search (nucleo), and the
//! reveal-path derivation that turns a hit into show/expand sets for the
//! core's tree-view projection.

pub mod error;
pub mod exact;
pub mod reveal;
pub mod traits;

#[cfg(feature = "fuzzy")]
pub mod fuzzy;

pub use error::{SearchError, SearchResult};
pub use exact::ExactSearchEngine;
pub use reveal::{reveal, RevealSets};
pub use traits::{SearchEngine, SearchHit, SearchQuery};

#[cfg(feature = "fuzzy")]
pub use fuzzy::FuzzySearchEngine;
