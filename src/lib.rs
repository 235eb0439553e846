//! # wordnet_sap
//!
//! Shortest ancestral path (SAP) queries over WordNet-style taxonomies.
//!
//! Given two concepts (or two sets of concepts) of a rooted "is-a" DAG, the
//! library finds the shortest path connecting them through a common ancestor
//! and reports its length and the ancestor.
//!
//! ## Features
//!
//! - **Linear**: each query is two multi-source BFS runs and one scan, O(V + E)
//! - **Set-valued queries**: polysemous nouns are answered in one pass per side
//! - **Validated**: cyclic hypernym tables are rejected at load time
//! - **Parallel batches**: the read-only graph is shared across rayon workers
//! - **Python bindings**: optional integration via PyO3

pub mod errors;
pub mod graph;
pub mod query;
pub mod sap;
pub mod taxonomy;
pub mod traversal;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SapError};
pub use types::{AncestralPath, Synset, TaxonomyConfig, Vertex, NO_PATH};

// Re-export main functionality
pub use graph::{find_cycle, is_acyclic, Digraph, DigraphBuilder, MAX_VERTEX_COUNT};
pub use query::{run_json, QueryRequest, QueryResponse};
pub use sap::Sap;
pub use taxonomy::{Outcast, Taxonomy};
pub use traversal::{MultiSourceBfs, PathTo};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
