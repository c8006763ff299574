//! Command-line layer for the `ugraph` tool.

pub mod commands;
pub mod input;

pub use input::{load_graph, parse_adjacency_json, parse_edge_list};
