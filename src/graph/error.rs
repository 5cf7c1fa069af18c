//! Graph construction and query errors.

use thiserror::Error;

/// Errors raised while building or querying a [`Graph`](super::Graph).
///
/// Construction errors are never repaired silently: a malformed matrix
/// almost always points at a bug in whatever produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A row's length differs from the number of rows.
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// A node is marked adjacent to itself.
    #[error("node {node} is connected to itself")]
    SelfLoop {
        /// Offending node.
        node: usize,
    },

    /// `matrix[row][col]` differs from `matrix[col][row]`.
    #[error("adjacency matrix is not symmetric at ({row}, {col})")]
    Asymmetric {
        /// Row of the first mismatching cell.
        row: usize,
        /// Column of the first mismatching cell.
        col: usize,
    },

    /// The number of marked cells is odd, so some edge is recorded from one
    /// endpoint only.
    #[error("adjacency matrix has an odd number of marked cells ({marks})")]
    OddEdgeMarks {
        /// Total number of `true` cells.
        marks: usize,
    },

    /// The node count is too large for an `n x n` adjacency matrix.
    #[error("a graph with {node_count} nodes does not fit in memory")]
    TooManyNodes {
        /// Requested number of nodes.
        node_count: usize,
    },

    /// A node index lies outside `0..node_count`.
    #[error("node index {index} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The index that was passed in.
        index: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}
