//! Graph construction and structural checks

pub mod cycle;
pub mod digraph;

pub use cycle::{find_cycle, is_acyclic};
pub use digraph::{Digraph, DigraphBuilder, MAX_VERTEX_COUNT};
