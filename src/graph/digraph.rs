//! Directed graph with a build phase and an immutable query phase
//!
//! `DigraphBuilder` collects edges over a fixed vertex range. Calling
//! [`DigraphBuilder::build`] consumes the builder and produces a compact
//! [`Digraph`] (offsets + targets) that can no longer be mutated, so every
//! traversal observes stable adjacency lists.

use crate::errors::{Result, SapError};
use crate::types::Vertex;
use std::io::BufRead;

/// Largest vertex count accepted when loading a graph or taxonomy from input
pub const MAX_VERTEX_COUNT: usize = 1 << 26;

/// A mutable digraph used while loading edges
#[derive(Debug, Clone)]
pub struct DigraphBuilder {
    /// Outgoing adjacency per vertex, in insertion order
    adjacency: Vec<Vec<Vertex>>,
    edge_count: usize,
}

impl DigraphBuilder {
    /// Create a builder over vertices `0..vertex_count` with no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added so far
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add the directed edge `from -> to`
    ///
    /// Parallel edges and self-loops are kept; BFS settles each vertex once,
    /// so they never change query answers.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) -> Result<()> {
        let n = self.vertex_count();
        if from >= n {
            return Err(SapError::out_of_range(from, n));
        }
        if to >= n {
            return Err(SapError::out_of_range(to, n));
        }
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Freeze the builder into an immutable digraph
    pub fn build(self) -> Digraph {
        let vertex_count = self.adjacency.len();
        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut targets = Vec::with_capacity(self.edge_count);
        let mut indegree = vec![0usize; vertex_count];

        offsets.push(0);
        for adj in self.adjacency {
            for &to in &adj {
                indegree[to] += 1;
            }
            targets.extend(adj);
            offsets.push(targets.len());
        }

        Digraph {
            offsets,
            targets,
            indegree,
        }
    }
}

/// An immutable digraph over vertices `0..V`
///
/// Adjacency is stored in compressed form: the targets of vertex `v` are
/// `targets[offsets[v]..offsets[v + 1]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    offsets: Vec<usize>,
    targets: Vec<Vertex>,
    indegree: Vec<usize>,
}

impl Digraph {
    /// Build a digraph from an edge list
    pub fn from_edges(vertex_count: usize, edges: &[(Vertex, Vertex)]) -> Result<Self> {
        let mut builder = DigraphBuilder::new(vertex_count);
        for &(from, to) in edges {
            builder.add_edge(from, to)?;
        }
        Ok(builder.build())
    }

    /// Read a digraph in the whitespace-separated `V E v1 w1 v2 w2 ...` format
    ///
    /// The first token is the vertex count, the second the edge count, followed
    /// by exactly that many `from to` pairs. A vertex count above
    /// [`MAX_VERTEX_COUNT`] is a parse error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut tokens = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            for token in line.split_whitespace() {
                tokens.push((idx + 1, token.to_string()));
            }
        }

        let mut iter = tokens.into_iter();
        let mut next_number = |what: &str| -> Result<(usize, usize)> {
            match iter.next() {
                Some((line, token)) => token
                    .parse::<usize>()
                    .map(|n| (line, n))
                    .map_err(|e| SapError::parse(line, format!("invalid {} '{}': {}", what, token, e))),
                None => Err(SapError::parse(0, format!("unexpected end of input, expected {}", what))),
            }
        };

        let (header_line, vertex_count) = next_number("vertex count")?;
        if vertex_count > MAX_VERTEX_COUNT {
            return Err(SapError::parse(
                header_line,
                format!("vertex count {} exceeds the limit of {}", vertex_count, MAX_VERTEX_COUNT),
            ));
        }
        let (_, edge_count) = next_number("edge count")?;

        let mut builder = DigraphBuilder::new(vertex_count);
        for _ in 0..edge_count {
            let (_, from) = next_number("edge source")?;
            let (_, to) = next_number("edge target")?;
            builder.add_edge(from, to)?;
        }

        log::debug!(
            "Read digraph with {} vertices and {} edges",
            vertex_count,
            edge_count
        );
        Ok(builder.build())
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.indegree.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Check that `v` lies in `[0, V)`
    pub fn validate_vertex(&self, v: Vertex) -> Result<()> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(SapError::out_of_range(v, self.vertex_count()))
        }
    }

    /// Outgoing neighbours of `v`
    pub fn adjacent(&self, v: Vertex) -> Result<&[Vertex]> {
        self.validate_vertex(v)?;
        Ok(self.neighbors(v))
    }

    /// Outgoing neighbours of a vertex already known to be in range
    #[inline]
    pub(crate) fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Number of outgoing edges of `v`
    pub fn outdegree(&self, v: Vertex) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.offsets[v + 1] - self.offsets[v])
    }

    /// Number of incoming edges of `v`
    pub fn indegree(&self, v: Vertex) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.indegree[v])
    }

    /// Iterate over all edges as `(from, to)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        (0..self.vertex_count()).flat_map(move |v| self.neighbors(v).iter().map(move |&w| (v, w)))
    }

    /// Vertices with no outgoing edge
    ///
    /// In a hypernym digraph these are the most general concepts.
    pub fn roots(&self) -> Vec<Vertex> {
        (0..self.vertex_count())
            .filter(|&v| self.offsets[v] == self.offsets[v + 1])
            .collect()
    }

    /// The digraph with every edge reversed
    pub fn reverse(&self) -> Digraph {
        let mut builder = DigraphBuilder::new(self.vertex_count());
        for (from, to) in self.edges() {
            builder.adjacency[to].push(from);
            builder.edge_count += 1;
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Digraph {
        // 0 -> 1 -> 2, 3 -> 1
        Digraph::from_edges(4, &[(0, 1), (1, 2), (3, 1)]).unwrap()
    }

    #[test]
    fn test_builder_counts() {
        let mut builder = DigraphBuilder::new(3);
        builder.add_edge(0, 1).unwrap();
        builder.add_edge(0, 2).unwrap();

        assert_eq!(builder.vertex_count(), 3);
        assert_eq!(builder.edge_count(), 2);

        let g = builder.build();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.adjacent(0).unwrap(), &[1, 2]);
        assert!(g.adjacent(2).unwrap().is_empty());
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut builder = DigraphBuilder::new(2);
        assert_eq!(builder.add_edge(0, 2), Err(SapError::out_of_range(2, 2)));
        assert_eq!(builder.add_edge(5, 0), Err(SapError::out_of_range(5, 2)));
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_adjacent_out_of_range() {
        let g = sample();
        assert!(g.adjacent(4).unwrap_err().is_out_of_range());
        assert!(g.outdegree(9).is_err());
    }

    #[test]
    fn test_degrees_and_roots() {
        let g = sample();
        assert_eq!(g.outdegree(0).unwrap(), 1);
        assert_eq!(g.indegree(1).unwrap(), 2);
        assert_eq!(g.indegree(0).unwrap(), 0);
        assert_eq!(g.roots(), vec![2]);
    }

    #[test]
    fn test_edges_and_reverse() {
        let g = sample();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (3, 1)]);

        let r = g.reverse();
        assert_eq!(r.edge_count(), 3);
        assert_eq!(r.adjacent(1).unwrap(), &[0, 3]);
        assert_eq!(r.adjacent(2).unwrap(), &[1]);
        assert_eq!(r.roots(), vec![0, 3]);
    }

    #[test]
    fn test_from_reader() {
        let input = "5\n4\n 0 1\n1 2\n3 2\n4 2\n";
        let g = Digraph::from_reader(input.as_bytes()).unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.indegree(2).unwrap(), 3);
    }

    #[test]
    fn test_from_reader_errors() {
        let err = Digraph::from_reader("3\n2\n0 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SapError::Parse { .. }));

        let err = Digraph::from_reader("3\n1\n0 x\n".as_bytes()).unwrap_err();
        assert_eq!(
            err,
            SapError::Parse {
                line: 3,
                message: "invalid edge target 'x': invalid digit found in string".to_string()
            }
        );

        let err = Digraph::from_reader("2\n1\n0 7\n".as_bytes()).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_from_reader_vertex_count_limit() {
        let err = Digraph::from_reader("18446744073709551615\n0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SapError::Parse { line: 1, .. }));

        let input = format!("{}\n0\n", MAX_VERTEX_COUNT + 1);
        assert!(Digraph::from_reader(input.as_bytes()).is_err());
    }
}
