//! Shortest ancestral path engine
//!
//! An ancestral path between `v` and `w` is a directed path from `v` to a
//! common ancestor `x` together with a directed path from `w` to the same
//! `x`. The engine answers queries by running one [`MultiSourceBfs`] per side
//! and scanning every vertex for the reachable-from-both vertex with the
//! smallest summed distance.
//!
//! Set-valued queries seed each side's BFS with the whole set, so a query
//! costs two traversals regardless of the set sizes.
//!
//! # Tie-break
//!
//! When several common ancestors share the minimal length, the one with the
//! lowest vertex id is reported.

use std::sync::Arc;

use rayon::prelude::*;

use crate::errors::{Result, SapError};
use crate::graph::Digraph;
use crate::traversal::MultiSourceBfs;
use crate::types::{AncestralPath, Vertex};

/// Batches smaller than this run sequentially
const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Shortest ancestral path queries over an immutable digraph
///
/// The engine owns (or shares) its graph read-only, so it is `Send + Sync`
/// and independent queries may run concurrently.
#[derive(Debug, Clone)]
pub struct Sap {
    graph: Arc<Digraph>,
    parallel_threshold: usize,
}

impl Sap {
    /// Create an engine that takes ownership of `graph`
    pub fn new(graph: Digraph) -> Self {
        Self::from_shared(Arc::new(graph))
    }

    /// Create an engine over a graph shared with other owners
    pub fn from_shared(graph: Arc<Digraph>) -> Self {
        Self {
            graph,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the batch size at which [`Sap::lengths_batch`] goes parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// The underlying digraph
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Shortest ancestral path between two vertices, `None` if they share no
    /// ancestor
    pub fn shortest(&self, v: Vertex, w: Vertex) -> Result<Option<AncestralPath>> {
        self.shortest_sets(&[v], &[w])
    }

    /// Length of the shortest ancestral path between `v` and `w`; `-1` if none
    pub fn length(&self, v: Vertex, w: Vertex) -> Result<isize> {
        Ok(AncestralPath::length_or_sentinel(self.shortest(v, w)?))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path; `-1` if
    /// none
    pub fn ancestor(&self, v: Vertex, w: Vertex) -> Result<isize> {
        Ok(AncestralPath::ancestor_or_sentinel(self.shortest(v, w)?))
    }

    /// Shortest ancestral path between any vertex of `vs` and any vertex of
    /// `ws`
    ///
    /// Both sets must be non-empty and contain only valid vertices; this is
    /// checked before any traversal starts.
    pub fn shortest_sets(&self, vs: &[Vertex], ws: &[Vertex]) -> Result<Option<AncestralPath>> {
        let (from_v, from_w) = self.search(vs, ws)?;
        let result = closest_common(&from_v, &from_w);
        log::debug!(
            "SAP {:?} x {:?}: {:?} (depths {} / {})",
            vs,
            ws,
            result,
            from_v.max_distance(),
            from_w.max_distance()
        );
        Ok(result)
    }

    /// Set-valued [`Sap::length`]
    pub fn length_sets(&self, vs: &[Vertex], ws: &[Vertex]) -> Result<isize> {
        Ok(AncestralPath::length_or_sentinel(self.shortest_sets(vs, ws)?))
    }

    /// Set-valued [`Sap::ancestor`]
    pub fn ancestor_sets(&self, vs: &[Vertex], ws: &[Vertex]) -> Result<isize> {
        Ok(AncestralPath::ancestor_or_sentinel(self.shortest_sets(vs, ws)?))
    }

    /// The vertices of a shortest ancestral path.
    ///
    /// Starts at a vertex of `vs`, climbs to the common ancestor and descends
    /// to a vertex of `ws`, so it holds `length + 1` vertices.
    pub fn path(&self, vs: &[Vertex], ws: &[Vertex]) -> Result<Option<Vec<Vertex>>> {
        let (from_v, from_w) = self.search(vs, ws)?;
        let Some(best) = closest_common(&from_v, &from_w) else {
            return Ok(None);
        };

        let (Some(up), Some(down)) = (from_v.path_to(best.ancestor), from_w.path_to(best.ancestor))
        else {
            return Err(SapError::invalid_hierarchy(format!(
                "ancestor {} lost its BFS path",
                best.ancestor
            )));
        };

        let mut path: Vec<Vertex> = up.collect();
        let mut down: Vec<Vertex> = down.collect();
        down.pop();
        path.extend(down.into_iter().rev());
        Ok(Some(path))
    }

    /// Lengths for many vertex pairs, spread over the rayon pool once the
    /// batch is large enough
    pub fn lengths_batch(&self, pairs: &[(Vertex, Vertex)]) -> Result<Vec<isize>> {
        if pairs.len() < self.parallel_threshold {
            return pairs.iter().map(|&(v, w)| self.length(v, w)).collect();
        }
        pairs.par_iter().map(|&(v, w)| self.length(v, w)).collect()
    }

    fn search(&self, vs: &[Vertex], ws: &[Vertex]) -> Result<(MultiSourceBfs, MultiSourceBfs)> {
        if vs.is_empty() || ws.is_empty() {
            return Err(SapError::invalid_argument(
                "vertex sets must contain at least one vertex",
            ));
        }
        for &x in vs.iter().chain(ws) {
            self.graph.validate_vertex(x)?;
        }

        let from_v = MultiSourceBfs::new(&self.graph, vs.iter().copied())?;
        let from_w = MultiSourceBfs::new(&self.graph, ws.iter().copied())?;
        Ok((from_v, from_w))
    }
}

/// Scan all vertices for the common one minimising the summed distance.
///
/// Strict `<` keeps the lowest vertex id among equal lengths.
fn closest_common(a: &MultiSourceBfs, b: &MultiSourceBfs) -> Option<AncestralPath> {
    let mut best: Option<AncestralPath> = None;
    for x in a.reached_vertices() {
        let (Some(da), Some(db)) = (a.distance_to(x), b.distance_to(x)) else {
            continue;
        };
        let length = da + db;
        if best.map_or(true, |p| length < p.length) {
            best = Some(AncestralPath::new(length, x));
        }
    }
    best
}
