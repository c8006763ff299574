//! In-memory graph representations and traversals.

pub mod builder;
pub mod matrix;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use matrix::AdjacencyMatrix;
pub use traversal::{bfs, bfs_levels, connected_components, dfs, dfs_forest};
pub use undirected::UndirectedGraph;
