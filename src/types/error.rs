//! Error types for the undirected-graph library.

use thiserror::Error;

/// Errors raised by operations that dereference a vertex.
///
/// Insertion (`add_vertex`, `add_edge`) creates missing vertices and never
/// fails; every removal, query and traversal entry point reports a missing
/// vertex through this one variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    /// The referenced vertex is not in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(V),
}

impl<V> GraphError<V> {
    /// The vertex identifier that caused the error.
    pub fn vertex(&self) -> &V {
        match self {
            Self::VertexNotFound(v) => v,
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T, V> = Result<T, GraphError<V>>;

/// Errors raised when building an adjacency matrix from raw rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Number of labels differs from the number of rows.
    #[error("Matrix has {rows} rows but {labels} labels")]
    LabelCount { labels: usize, rows: usize },

    /// A row's length differs from the number of rows.
    #[error("Row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("Cell ({row}, {col}) holds {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    /// Cell (row, col) differs from cell (col, row).
    #[error("Cells ({row}, {col}) and ({col}, {row}) disagree")]
    Asymmetric { row: usize, col: usize },
}

/// Errors raised by the `ugraph` command-line layer.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command referenced a vertex the input graph lacks.
    #[error(transparent)]
    Graph(#[from] GraphError<String>),

    /// Malformed line in an edge-list file.
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Malformed JSON adjacency document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
