//! Tabu clique search errors.

use thiserror::Error;

/// Precondition failures raised before a search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabuError {
    /// The graph has no nodes, so there is no seed clique.
    #[error("cannot search a graph with no nodes")]
    EmptyGraph,

    /// `max_steps` was zero.
    #[error("step budget must be at least 1")]
    ZeroStepBudget,

    /// Some other configuration value is out of range.
    #[error("invalid tabu configuration: {0}")]
    InvalidConfig(String),
}
