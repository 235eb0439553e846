//! Directed cycle detection
//!
//! Uses an iterative three-colour DFS so that deep hierarchies cannot
//! overflow the call stack. Runs in O(V + E).

use super::digraph::Digraph;
use crate::types::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet discovered
    White,
    /// On the current DFS path
    Gray,
    /// Fully explored
    Black,
}

/// Find one directed cycle, if any.
///
/// The returned cycle starts and ends at the same vertex, e.g. `[a, b, a]`
/// for the cycle `a -> b -> a`, so consecutive entries are always joined by
/// an edge of `graph`.
pub fn find_cycle(graph: &Digraph) -> Option<Vec<Vertex>> {
    let n = graph.vertex_count();
    let mut color = vec![Color::White; n];
    let mut edge_to = vec![usize::MAX; n];
    // (vertex, index of the next neighbour to explore)
    let mut stack: Vec<(Vertex, usize)> = Vec::new();

    for start in 0..n {
        if color[start] != Color::White {
            continue;
        }
        color[start] = Color::Gray;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let v = frame.0;
            let adj = graph.neighbors(v);
            if frame.1 < adj.len() {
                let w = adj[frame.1];
                frame.1 += 1;
                match color[w] {
                    Color::White => {
                        edge_to[w] = v;
                        color[w] = Color::Gray;
                        stack.push((w, 0));
                    }
                    Color::Gray => return Some(trace_cycle(&edge_to, v, w)),
                    Color::Black => {}
                }
            } else {
                color[v] = Color::Black;
                stack.pop();
            }
        }
    }

    None
}

/// Walk tree edges back from `v` to `w`, then close with the back edge `v -> w`
fn trace_cycle(edge_to: &[Vertex], v: Vertex, w: Vertex) -> Vec<Vertex> {
    let mut cycle = Vec::new();
    let mut x = v;
    while x != w {
        cycle.push(x);
        x = edge_to[x];
    }
    cycle.push(w);
    cycle.reverse();
    cycle.push(w);
    cycle
}

/// Check whether the digraph has no directed cycle
pub fn is_acyclic(graph: &Digraph) -> bool {
    find_cycle(graph).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_cycle(graph: &Digraph, cycle: &[Vertex]) {
        assert!(cycle.len() >= 2);
        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            assert!(
                graph.adjacent(pair[0]).unwrap().contains(&pair[1]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_dag_has_no_cycle() {
        let g = Digraph::from_edges(5, &[(0, 1), (1, 2), (3, 2), (4, 3), (4, 0)]).unwrap();
        assert!(find_cycle(&g).is_none());
        assert!(is_acyclic(&g));
    }

    #[test]
    fn test_two_cycle() {
        let g = Digraph::from_edges(2, &[(0, 1), (1, 0)]).unwrap();
        let cycle = find_cycle(&g).unwrap();
        assert_is_cycle(&g, &cycle);
        assert_eq!(cycle.len(), 3);
    }

    #[test]
    fn test_self_loop() {
        let g = Digraph::from_edges(3, &[(0, 1), (2, 2)]).unwrap();
        assert_eq!(find_cycle(&g), Some(vec![2, 2]));
    }

    #[test]
    fn test_cycle_behind_dag_prefix() {
        // 0 -> 1 -> 2 -> 3 -> 1, plus a diamond that must not be reported
        let g = Digraph::from_edges(
            6,
            &[(4, 5), (4, 0), (5, 0), (0, 1), (1, 2), (2, 3), (3, 1)],
        )
        .unwrap();
        let cycle = find_cycle(&g).unwrap();
        assert_is_cycle(&g, &cycle);
        assert!(!cycle.contains(&0));
    }

    #[test]
    fn test_empty_graph() {
        let g = Digraph::from_edges(0, &[]).unwrap();
        assert!(is_acyclic(&g));
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let n = 200_000;
        let edges: Vec<_> = (0..n - 1).map(|v| (v, v + 1)).collect();
        let g = Digraph::from_edges(n, &edges).unwrap();
        assert!(is_acyclic(&g));
    }
}
