//! Maximum clique search for simple undirected graphs.
//!
//! Two complementary engines share one immutable [`graph::Graph`]:
//!
//! - **Tabu search** ([`tabu`]): a reactive local-search metaheuristic with
//!   adaptive tabu tenure and diversification restarts. Fast, usually
//!   optimal, never proven so.
//! - **Exact verifier** ([`exhaustive`]): backtracking enumeration of node
//!   subsets that decides whether a clique of size `k` exists.
//!
//! Running the verifier for `k` and `k + 1` on the size returned by the
//! heuristic certifies (or refutes) that the heuristic found a maximum
//! clique.
//!
//! ```
//! use u_clique::exhaustive::ExactCliqueVerifier;
//! use u_clique::graph::Graph;
//! use u_clique::tabu::{TabuCliqueConfig, TabuCliqueSearch};
//!
//! let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)]).unwrap();
//! let config = TabuCliqueConfig::default().with_seed(42);
//! let found = TabuCliqueSearch::run(&graph, &config).unwrap();
//!
//! let certificate = ExactCliqueVerifier::new(&graph).certify(found.clique.len(), true);
//! assert!(certificate.is_maximum());
//! ```
//!
//! # Architecture
//!
//! Every engine is single-threaded and synchronous. The graph is read-only,
//! so independent searches may run on separate threads over the same graph.

pub mod exhaustive;
pub mod graph;
pub mod tabu;
