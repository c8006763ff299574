//! Undirected graphs as adjacency lists.
//!
//! Stores an undirected graph as a mapping from each vertex to the set of its
//! neighbors, keeps that relation symmetric across every mutation, and offers
//! breadth-first and depth-first traversal plus an adjacency-matrix view.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs, bfs_levels, connected_components, dfs, dfs_forest, AdjacencyMatrix, GraphBuilder,
    UndirectedGraph,
};
pub use types::{CliError, CliResult, GraphError, GraphResult, MatrixError};
