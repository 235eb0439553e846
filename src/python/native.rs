//! Native Python interface
//!
//! Direct Python classes wrapping the digraph, the SAP engine and the
//! taxonomy index. Errors surface as `KeyError` (unknown noun), `IndexError`
//! (vertex out of range), `IOError` or `ValueError`.

use super::to_py_err;
use crate::graph::Digraph;
use crate::sap::Sap;
use crate::taxonomy::{Outcast, Taxonomy};
use crate::types::{AncestralPath, TaxonomyConfig, Vertex};
use pyo3::prelude::*;

/// Result of a shortest ancestral path query
#[pyclass(name = "AncestralPath", frozen)]
#[derive(Clone)]
pub struct PyAncestralPath {
    #[pyo3(get)]
    pub length: usize,
    #[pyo3(get)]
    pub ancestor: Vertex,
}

#[pymethods]
impl PyAncestralPath {
    fn __repr__(&self) -> String {
        format!(
            "AncestralPath(length={}, ancestor={})",
            self.length, self.ancestor
        )
    }
}

impl From<AncestralPath> for PyAncestralPath {
    fn from(p: AncestralPath) -> Self {
        Self {
            length: p.length,
            ancestor: p.ancestor,
        }
    }
}

/// Immutable directed graph
#[pyclass(name = "Digraph", frozen)]
#[derive(Clone)]
pub struct PyDigraph {
    inner: Digraph,
}

#[pymethods]
impl PyDigraph {
    #[new]
    #[pyo3(signature = (vertex_count, edges=None))]
    fn new(vertex_count: usize, edges: Option<Vec<(Vertex, Vertex)>>) -> PyResult<Self> {
        let inner = Digraph::from_edges(vertex_count, &edges.unwrap_or_default()).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Read a digraph in the `V E v w ...` text format
    #[staticmethod]
    fn from_text(text: &str) -> PyResult<Self> {
        let inner = Digraph::from_reader(text.as_bytes()).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    #[getter]
    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn adjacent(&self, v: Vertex) -> PyResult<Vec<Vertex>> {
        self.inner
            .adjacent(v)
            .map(<[Vertex]>::to_vec)
            .map_err(to_py_err)
    }

    fn roots(&self) -> Vec<Vertex> {
        self.inner.roots()
    }

    fn __repr__(&self) -> String {
        format!(
            "Digraph(vertex_count={}, edge_count={})",
            self.inner.vertex_count(),
            self.inner.edge_count()
        )
    }
}

/// Shortest ancestral path engine
#[pyclass(name = "Sap", frozen)]
pub struct PySap {
    inner: Sap,
}

#[pymethods]
impl PySap {
    /// The engine copies the digraph, later changes on the Python side
    /// cannot affect it
    #[new]
    fn new(graph: PyRef<'_, PyDigraph>) -> Self {
        Self {
            inner: Sap::new(graph.inner.clone()),
        }
    }

    /// Length of the shortest ancestral path; -1 if there is none
    fn length(&self, v: Vertex, w: Vertex) -> PyResult<isize> {
        self.inner.length(v, w).map_err(to_py_err)
    }

    /// Common ancestor on a shortest ancestral path; -1 if there is none
    fn ancestor(&self, v: Vertex, w: Vertex) -> PyResult<isize> {
        self.inner.ancestor(v, w).map_err(to_py_err)
    }

    fn length_sets(&self, vs: Vec<Vertex>, ws: Vec<Vertex>) -> PyResult<isize> {
        self.inner.length_sets(&vs, &ws).map_err(to_py_err)
    }

    fn ancestor_sets(&self, vs: Vec<Vertex>, ws: Vec<Vertex>) -> PyResult<isize> {
        self.inner.ancestor_sets(&vs, &ws).map_err(to_py_err)
    }

    /// Shortest ancestral path between two vertex sets, or None
    fn shortest(&self, vs: Vec<Vertex>, ws: Vec<Vertex>) -> PyResult<Option<PyAncestralPath>> {
        self.inner
            .shortest_sets(&vs, &ws)
            .map(|p| p.map(PyAncestralPath::from))
            .map_err(to_py_err)
    }

    /// Vertices of a shortest ancestral path, or None
    fn path(&self, vs: Vec<Vertex>, ws: Vec<Vertex>) -> PyResult<Option<Vec<Vertex>>> {
        self.inner.path(&vs, &ws).map_err(to_py_err)
    }

    fn lengths_batch(&self, py: Python<'_>, pairs: Vec<(Vertex, Vertex)>) -> PyResult<Vec<isize>> {
        let sap = &self.inner;
        py.allow_threads(|| sap.lengths_batch(&pairs))
            .map_err(to_py_err)
    }
}

/// WordNet-style taxonomy
#[pyclass(name = "Taxonomy", frozen)]
pub struct PyTaxonomy {
    inner: Taxonomy,
}

impl PyTaxonomy {
    pub(crate) fn inner(&self) -> &Taxonomy {
        &self.inner
    }
}

#[pymethods]
impl PyTaxonomy {
    /// Load from a synsets file and a hypernyms file
    #[new]
    #[pyo3(signature = (synsets, hypernyms, require_single_root=false))]
    fn new(synsets: &str, hypernyms: &str, require_single_root: bool) -> PyResult<Self> {
        let config = TaxonomyConfig::default().with_require_single_root(require_single_root);
        let inner = Taxonomy::from_paths(synsets, hypernyms, config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Load from the text of both tables
    #[staticmethod]
    #[pyo3(signature = (synsets, hypernyms, config_json=None))]
    fn from_text(synsets: &str, hypernyms: &str, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => serde_json::from_str::<TaxonomyConfig>(json)
                .map_err(|e| pyo3::exceptions::PyValueError::new_err(format!("Invalid config: {}", e)))?,
            None => TaxonomyConfig::default(),
        };
        let inner = Taxonomy::from_readers(synsets.as_bytes(), hypernyms.as_bytes(), config)
            .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn nouns(&self) -> Vec<String> {
        self.inner.nouns().into_iter().map(str::to_string).collect()
    }

    fn is_noun(&self, word: &str) -> bool {
        self.inner.is_noun(word)
    }

    fn __contains__(&self, word: &str) -> bool {
        self.inner.is_noun(word)
    }

    fn __len__(&self) -> usize {
        self.inner.noun_count()
    }

    /// Semantic distance between two nouns; -1 if unrelated
    fn distance(&self, a: &str, b: &str) -> PyResult<isize> {
        self.inner.distance(a, b).map_err(to_py_err)
    }

    /// Label of the shortest common ancestor, or None
    fn sap(&self, a: &str, b: &str) -> PyResult<Option<String>> {
        self.inner
            .sap(a, b)
            .map(|label| label.map(str::to_string))
            .map_err(to_py_err)
    }

    fn synsets_of(&self, word: &str) -> PyResult<Vec<Vertex>> {
        self.inner
            .synsets_of(word)
            .map(<[Vertex]>::to_vec)
            .map_err(to_py_err)
    }

    /// The noun least related to the others
    fn outcast(&self, nouns: Vec<String>) -> PyResult<String> {
        let words: Vec<&str> = nouns.iter().map(String::as_str).collect();
        Outcast::new(&self.inner)
            .outcast(&words)
            .map(str::to_string)
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "Taxonomy(synsets={}, nouns={})",
            self.inner.concept_count(),
            self.inner.noun_count()
        )
    }
}
