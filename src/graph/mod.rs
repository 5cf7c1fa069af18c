//! Immutable undirected graph model.
//!
//! A [`Graph`] is built once from a square boolean adjacency matrix (or an
//! edge list) and never mutated afterward. Construction is the only
//! validation gate: a matrix that is not square, not symmetric, or carries
//! self-loops is rejected with a [`GraphError`] naming the offending cell.
//!
//! Both search engines borrow the graph read-only, so a single instance can
//! be shared by any number of concurrent searches.

mod error;
mod types;

pub use error::GraphError;
pub use types::Graph;
