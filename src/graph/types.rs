//! Adjacency-matrix graph.

use std::fmt;

use fixedbitset::FixedBitSet;

use super::error::GraphError;

/// A simple, undirected, loop-free graph on nodes `0..node_count`.
///
/// Each node's neighborhood is stored as a [`FixedBitSet`] row of length
/// `node_count`, and node degrees are precomputed at construction. There
/// are no mutation operations.
///
/// # Examples
///
/// ```
/// use u_clique::graph::Graph;
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(1).unwrap(), 2);
/// assert!(graph.are_adjacent(2, 1).unwrap());
/// assert!(!graph.are_adjacent(0, 2).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edge_count: usize,
    rows: Vec<FixedBitSet>,
    degrees: Vec<usize>,
}

impl Graph {
    /// Builds a graph from a square boolean adjacency matrix.
    ///
    /// The matrix must be square, loop-free and symmetric. The first
    /// violation found (scanning rows in order) is reported.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotSquare`] if any row length differs from the row count
    /// - [`GraphError::SelfLoop`] if `matrix[i][i]` is set
    /// - [`GraphError::Asymmetric`] if `matrix[i][j] != matrix[j][i]`
    /// - [`GraphError::OddEdgeMarks`] if the marked-cell count is odd
    pub fn from_adjacency_matrix(matrix: &[Vec<bool>]) -> Result<Self, GraphError> {
        let n = matrix.len();

        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: n,
                });
            }
        }

        let mut marks = 0usize;
        for i in 0..n {
            if matrix[i][i] {
                return Err(GraphError::SelfLoop { node: i });
            }
            for j in 0..n {
                if matrix[i][j] != matrix[j][i] {
                    return Err(GraphError::Asymmetric { row: i, col: j });
                }
                if matrix[i][j] {
                    marks += 1;
                }
            }
        }

        // Unreachable for a symmetric, loop-free matrix; kept as the last
        // consistency gate on the edge count.
        if marks % 2 != 0 {
            return Err(GraphError::OddEdgeMarks { marks });
        }

        let rows = matrix
            .iter()
            .map(|cells| {
                let mut row = FixedBitSet::with_capacity(n);
                for (j, &linked) in cells.iter().enumerate() {
                    row.set(j, linked);
                }
                row
            })
            .collect();
        Ok(Self::from_rows(rows))
    }

    /// Builds a graph from an undirected edge list.
    ///
    /// Each pair is recorded in both directions; repeated pairs collapse
    /// into a single edge.
    ///
    /// # Errors
    ///
    /// - [`GraphError::TooManyNodes`] if `node_count²` overflows `usize`
    /// - [`GraphError::NodeOutOfRange`] if an endpoint is `>= node_count`
    /// - [`GraphError::SelfLoop`] if a pair joins a node to itself
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut rows = blank_rows(node_count)?;
        for &(u, v) in edges {
            for index in [u, v] {
                if index >= node_count {
                    return Err(GraphError::NodeOutOfRange { index, node_count });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { node: u });
            }
            rows[u].insert(v);
            rows[v].insert(u);
        }
        Ok(Self::from_rows(rows))
    }

    /// Builds a graph with `node_count` isolated nodes.
    ///
    /// # Errors
    ///
    /// [`GraphError::TooManyNodes`] if `node_count²` overflows `usize`.
    pub fn empty(node_count: usize) -> Result<Self, GraphError> {
        Ok(Self::from_rows(blank_rows(node_count)?))
    }

    /// Assembles a graph from already validated, symmetric rows.
    fn from_rows(rows: Vec<FixedBitSet>) -> Self {
        let degrees: Vec<usize> = rows.iter().map(|row| row.count_ones(..)).collect();
        let edge_count = degrees.iter().sum::<usize>() / 2;

        Self {
            node_count: rows.len(),
            edge_count,
            rows,
            degrees,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edge count of the complete graph on the same node set, `n(n-1)/2`.
    pub fn max_edge_count(&self) -> usize {
        self.node_count * self.node_count.saturating_sub(1) / 2
    }

    /// Returns whether `a` and `b` share an edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] if either index is `>= node_count`.
    pub fn are_adjacent(&self, a: usize, b: usize) -> Result<bool, GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;
        Ok(self.adjacent(a, b))
    }

    /// Number of neighbors of `node`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] if `node >= node_count`.
    pub fn degree(&self, node: usize) -> Result<usize, GraphError> {
        self.check_node(node)?;
        Ok(self.degrees[node])
    }

    /// Degrees of all nodes, indexed by node.
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Iterates the neighbors of `node` in ascending order.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] if `node >= node_count`.
    pub fn neighbors(&self, node: usize) -> Result<impl Iterator<Item = usize> + '_, GraphError> {
        self.check_node(node)?;
        Ok(self.rows[node].ones())
    }

    /// Returns whether `nodes` is a clique: no repeated index and every
    /// pair adjacent. The empty set and single nodes are cliques.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeOutOfRange`] if any index is `>= node_count`.
    pub fn is_clique(&self, nodes: &[usize]) -> Result<bool, GraphError> {
        for &node in nodes {
            self.check_node(node)?;
        }
        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                if !self.adjacent(a, b) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Unchecked adjacency lookup for the search engines.
    ///
    /// Panics on out-of-range indices; callers only pass node ids they
    /// obtained from this graph.
    #[inline]
    pub(crate) fn adjacent(&self, a: usize, b: usize) -> bool {
        self.rows[a].contains(b)
    }

    /// Neighborhood of `node` as a bitset over all nodes.
    #[inline]
    pub(crate) fn row(&self, node: usize) -> &FixedBitSet {
        &self.rows[node]
    }

    fn check_node(&self, index: usize) -> Result<(), GraphError> {
        if index < self.node_count {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                index,
                node_count: self.node_count,
            })
        }
    }
}

/// One empty neighborhood row per node, refusing sizes whose full
/// `n x n` matrix would not be addressable.
fn blank_rows(node_count: usize) -> Result<Vec<FixedBitSet>, GraphError> {
    if node_count.checked_mul(node_count).is_none() {
        return Err(GraphError::TooManyNodes { node_count });
    }
    Ok(vec![FixedBitSet::with_capacity(node_count); node_count])
}

impl fmt::Display for Graph {
    /// One matrix row per line, cells as `0`/`1` separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.node_count {
            for j in 0..self.node_count {
                if j > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.adjacent(i, j) { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
