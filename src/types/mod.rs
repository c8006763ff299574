//! Shared types for the undirected-graph library.

pub mod error;

pub use error::{CliError, CliResult, GraphError, GraphResult, MatrixError};
