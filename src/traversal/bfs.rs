//! Multi-source breadth-first search
//!
//! All sources start at distance 0 and the frontier expands along outgoing
//! edges. Each vertex is settled at most once, by the first time it is
//! reached, which in BFS order is also its shortest distance to the nearest
//! source.
//!
//! A single-source search is just the singleton case of
//! [`MultiSourceBfs::new`].
//!
//! # Performance
//!
//! O(V + E) time and O(V) space per run. Results are owned by the run and
//! never shared between runs.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::errors::{Result, SapError};
use crate::graph::Digraph;
use crate::types::Vertex;

/// Distance reported internally for vertices that were never reached
const INFINITY: usize = usize::MAX;

/// The result of one multi-source BFS run
#[derive(Debug, Clone)]
pub struct MultiSourceBfs {
    marked: Vec<bool>,
    dist_to: Vec<usize>,
    edge_to: Vec<Vertex>,
    sources: Vec<Vertex>,
    max_distance: usize,
}

impl MultiSourceBfs {
    /// Run BFS from every vertex of `sources` at once.
    ///
    /// Fails with `InvalidArgument` if `sources` is empty and with
    /// `OutOfRange` if any source is not a vertex of `graph`. Duplicate
    /// sources are ignored.
    pub fn new<I>(graph: &Digraph, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let sources: Vec<Vertex> = sources.into_iter().collect();
        if sources.is_empty() {
            return Err(SapError::invalid_argument("BFS needs at least one source vertex"));
        }
        for &s in &sources {
            graph.validate_vertex(s)?;
        }

        let n = graph.vertex_count();
        let mut bfs = Self {
            marked: vec![false; n],
            dist_to: vec![INFINITY; n],
            edge_to: vec![usize::MAX; n],
            sources,
            max_distance: 0,
        };
        bfs.run(graph);
        Ok(bfs)
    }

    /// Run BFS from a single source
    pub fn single(graph: &Digraph, source: Vertex) -> Result<Self> {
        Self::new(graph, std::iter::once(source))
    }

    fn run(&mut self, graph: &Digraph) {
        let mut queue = VecDeque::with_capacity(self.sources.len());
        for &s in &self.sources {
            if !self.marked[s] {
                self.marked[s] = true;
                self.dist_to[s] = 0;
                queue.push_back(s);
            }
        }

        while let Some(v) = queue.pop_front() {
            let next = self.dist_to[v] + 1;
            for &w in graph.neighbors(v) {
                if !self.marked[w] {
                    self.marked[w] = true;
                    self.dist_to[w] = next;
                    self.edge_to[w] = v;
                    self.max_distance = next;
                    queue.push_back(w);
                }
            }
        }
    }

    /// Number of vertices of the searched graph
    pub fn vertex_count(&self) -> usize {
        self.marked.len()
    }

    /// The sources this run started from
    pub fn sources(&self) -> &[Vertex] {
        &self.sources
    }

    /// Is there a directed path from some source to `v`?
    ///
    /// Vertices outside the graph are never reached.
    pub fn has_path_to(&self, v: Vertex) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// Length of the shortest path from the nearest source to `v`, or `None`
    /// if `v` is unreachable
    pub fn distance_to(&self, v: Vertex) -> Option<usize> {
        if self.has_path_to(v) {
            Some(self.dist_to[v])
        } else {
            None
        }
    }

    /// Largest finite distance of this run
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Owned snapshot of the reached flags, indexed by vertex
    pub fn reached(&self) -> Vec<bool> {
        self.marked.clone()
    }

    /// Iterate over reached vertices in increasing id order
    pub fn reached_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| if m { Some(v) } else { None })
    }

    /// Shortest path from the nearest source to `v`, both ends included.
    ///
    /// Returns `None` if `v` is unreachable.
    pub fn path_to(&self, v: Vertex) -> Option<PathTo> {
        if !self.has_path_to(v) {
            return None;
        }

        let mut stack = Vec::with_capacity(self.dist_to[v] + 1);
        let mut x = v;
        while self.dist_to[x] != 0 {
            stack.push(x);
            x = self.edge_to[x];
        }
        stack.push(x);
        Some(PathTo { stack })
    }
}

/// Vertices of a BFS path, yielded from the source towards the target
#[derive(Debug, Clone)]
pub struct PathTo {
    /// Target at the bottom, source on top
    stack: Vec<Vertex>,
}

impl Iterator for PathTo {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        self.stack.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl ExactSizeIterator for PathTo {}

impl FusedIterator for PathTo {}
