//! Graph traversals

pub mod bfs;

pub use bfs::{MultiSourceBfs, PathTo};
