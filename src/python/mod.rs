//! Python bindings via PyO3
//!
//! This module provides the Python interface for wordnet_sap.

pub mod json;
pub mod native;

use crate::errors::SapError;
use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface classes
    m.add_class::<native::PyAncestralPath>()?;
    m.add_class::<native::PyDigraph>()?;
    m.add_class::<native::PySap>()?;
    m.add_class::<native::PyTaxonomy>()?;

    // JSON interface functions
    m.add_function(wrap_pyfunction!(json::query_from_json, m)?)?;

    Ok(())
}

/// Map a library error onto the closest Python exception
pub(crate) fn to_py_err(err: SapError) -> PyErr {
    match err {
        SapError::UnknownWord { .. } => pyo3::exceptions::PyKeyError::new_err(err.to_string()),
        SapError::OutOfRange { .. } => pyo3::exceptions::PyIndexError::new_err(err.to_string()),
        SapError::Io { .. } => pyo3::exceptions::PyIOError::new_err(err.to_string()),
        _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
    }
}
