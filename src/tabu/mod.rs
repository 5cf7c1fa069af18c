//! Reactive tabu search for maximum cliques.
//!
//! A single-solution local search over cliques. Each step adds the most
//! promising non-tabu node, or drops the member that blocks the most
//! near-members, or drops a random member when everything is tabu. The
//! prohibition period (tabu tenure) reacts to the search: revisiting the
//! same clique soon raises it, a long calm stretch lowers it. Stalled
//! searches restart from nodes that have never been moved.
//!
//! Randomness is always injected: [`TabuCliqueSearch::run_with_rng`] and
//! [`find_maximum_clique`] take the generator from the caller, so a fixed
//! seed reproduces every tie-break.
//!
//! # References
//!
//! - Battiti, R. & Protasi, M. (2001). "Reactive local search for the maximum
//!   clique problem", *Algorithmica* 29(4), 610-637.
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

mod config;
mod error;
mod runner;
mod state;
mod types;

pub use config::TabuCliqueConfig;
pub use error::TabuError;
pub use runner::{find_maximum_clique, TabuCliqueResult, TabuCliqueSearch};
pub use state::SearchState;
pub use types::{StepMove, StepReport};
