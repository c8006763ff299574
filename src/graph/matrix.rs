//! Adjacency-matrix view of an undirected graph.
//!
//! A V×V grid of 0/1 cells where cell (i, j) is 1 iff vertex i and vertex j
//! share an edge. Lookups by index are O(1) but storage is O(V²) regardless
//! of how many edges exist, which is why `UndirectedGraph` keeps an
//! adjacency list instead.

use std::fmt;
use std::hash::Hash;

use crate::types::MatrixError;

use super::UndirectedGraph;

/// A labelled, symmetric 0/1 adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<V> {
    labels: Vec<V>,
    cells: Vec<Vec<u8>>,
}

impl<V> AdjacencyMatrix<V>
where
    V: Eq + Hash + Clone,
{
    /// Build the matrix of a graph. Rows follow vertex insertion order.
    pub fn from_graph(graph: &UndirectedGraph<V>) -> Self {
        let labels: Vec<V> = graph.vertices().cloned().collect();
        let n = labels.len();
        let mut cells = vec![vec![0u8; n]; n];

        for (row, (_, neighbors)) in graph.adjacency().enumerate() {
            for neighbor in neighbors {
                if let Some(col) = graph.index_of(neighbor) {
                    cells[row][col] = 1;
                }
            }
        }

        Self { labels, cells }
    }

    /// Build a matrix from labels and raw rows.
    ///
    /// Rows must be square, hold only 0 or 1, and be symmetric.
    pub fn from_rows(labels: Vec<V>, cells: Vec<Vec<u8>>) -> Result<Self, MatrixError> {
        let n = cells.len();
        if labels.len() != n {
            return Err(MatrixError::LabelCount {
                labels: labels.len(),
                rows: n,
            });
        }

        for (row, cells_in_row) in cells.iter().enumerate() {
            if cells_in_row.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: cells_in_row.len(),
                    expected: n,
                });
            }
            for (col, &value) in cells_in_row.iter().enumerate() {
                if value > 1 {
                    return Err(MatrixError::InvalidCell { row, col, value });
                }
            }
        }

        for row in 0..n {
            for col in (row + 1)..n {
                if cells[row][col] != cells[col][row] {
                    return Err(MatrixError::Asymmetric { row, col });
                }
            }
        }

        Ok(Self { labels, cells })
    }

    /// Row and column labels.
    pub fn labels(&self) -> &[V] {
        &self.labels
    }

    /// Raw rows.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    /// Matrix dimension (number of vertices).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the matrix has no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether cells (i, j) mark an edge. `None` when out of range.
    pub fn is_adjacent(&self, i: usize, j: usize) -> Option<bool> {
        self.cells.get(i)?.get(j).map(|&c| c == 1)
    }

    /// Index of a label.
    pub fn index_of(&self, label: &V) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Convert back into an adjacency-list graph.
    pub fn to_graph(&self) -> UndirectedGraph<V> {
        let mut graph = UndirectedGraph::new();
        for label in &self.labels {
            graph.add_vertex(label.clone());
        }
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate().skip(row) {
                if cell == 1 {
                    graph.add_edge(self.labels[row].clone(), self.labels[col].clone());
                }
            }
        }
        graph
    }
}

/// Grid with a header row of labels, e.g.
///
/// ```text
///     A B C
/// A | 0 1 0
/// B | 1 0 1
/// C | 0 1 0
/// ```
impl<V: fmt::Display> fmt::Display for AdjacencyMatrix<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = self.labels.iter().map(|l| l.to_string()).collect();
        let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(1);

        write!(f, "{:pad$}", "", pad = width + 2)?;
        for name in &names {
            write!(f, " {:>width$}", name, width = width)?;
        }
        writeln!(f)?;

        for (name, row) in names.iter().zip(&self.cells) {
            write!(f, "{:<width$} |", name, width = width)?;
            for cell in row {
                write!(f, " {:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> AdjacencyMatrix<char> {
        AdjacencyMatrix::from_rows(
            vec!['A', 'B', 'C'],
            vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]],
        )
        .unwrap()
    }

    #[test]
    fn test_display_grid() {
        assert_eq!(abc().to_string(), "    A B C\nA | 0 1 0\nB | 1 0 1\nC | 0 1 0\n");
    }

    #[test]
    fn test_display_empty_matrix() {
        let matrix: AdjacencyMatrix<char> = AdjacencyMatrix::from_rows(vec![], vec![]).unwrap();
        assert_eq!(matrix.to_string(), "");
    }

    #[test]
    fn test_is_adjacent_out_of_range() {
        let matrix = abc();
        assert_eq!(matrix.is_adjacent(1, 0), Some(true));
        assert_eq!(matrix.is_adjacent(0, 2), Some(false));
        assert_eq!(matrix.is_adjacent(3, 0), None);
    }

    #[test]
    fn test_rejects_malformed_rows() {
        assert_eq!(
            AdjacencyMatrix::from_rows(vec!['A', 'B'], vec![vec![0, 1], vec![1]]),
            Err(MatrixError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            AdjacencyMatrix::from_rows(vec!['A', 'B'], vec![vec![0, 2], vec![1, 0]]),
            Err(MatrixError::InvalidCell {
                row: 0,
                col: 1,
                value: 2
            })
        );
        assert_eq!(
            AdjacencyMatrix::from_rows(vec!['A', 'B'], vec![vec![0, 1], vec![0, 0]]),
            Err(MatrixError::Asymmetric { row: 0, col: 1 })
        );
        assert_eq!(
            AdjacencyMatrix::from_rows(vec!['A'], vec![vec![0, 1], vec![1, 0]]),
            Err(MatrixError::LabelCount { labels: 1, rows: 2 })
        );
    }
}
