//! JSON interface for batch queries
//!
//! Passing a whole batch as one JSON string keeps Python↔Rust crossings to
//! one per batch and lets large batches run on the rayon pool.

use super::native::PyTaxonomy;
use super::to_py_err;
use crate::query::run_json;
use pyo3::prelude::*;

/// Answer a JSON batch of noun-pair and outcast queries
///
/// Args:
///     taxonomy: a loaded Taxonomy
///     json_input: JSON string `{"queries": [{"a": ..., "b": ...}], "outcasts": [[...]]}`
///
/// Returns:
///     JSON string with `answers` and `outcasts`
#[pyfunction]
#[pyo3(signature = (taxonomy, json_input))]
pub fn query_from_json(py: Python<'_>, taxonomy: PyRef<'_, PyTaxonomy>, json_input: &str) -> PyResult<String> {
    let inner = taxonomy.inner();
    py.allow_threads(|| run_json(inner, json_input))
        .map_err(to_py_err)
}
