//! Exact k-clique decision by exhaustive backtracking.
//!
//! [`ExactCliqueVerifier`] answers, with certainty, whether a graph contains
//! a clique of a given size. Node subsets of size `k` are enumerated as an
//! include/exclude traversal in index order and the first fully adjacent
//! subset ends the search.
//!
//! Three cheap shortcuts (size above node count, complete graph, too few
//! nodes of degree `k - 1`) can be enabled. They only end the search
//! earlier; the answer is the same with or without them.
//!
//! Worst case is exponential in the node count. The verifier exists to
//! certify results of the heuristic in [`crate::tabu`] on small graphs.

mod types;
mod verifier;

pub use types::OptimalityCertificate;
pub use verifier::ExactCliqueVerifier;
