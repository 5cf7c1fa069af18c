//! Per-step outcome types.

/// The clique move made by one search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMove {
    /// A non-tabu node adjacent to every member was added.
    Added(usize),
    /// A non-tabu member was dropped.
    Dropped(usize),
    /// Every candidate was tabu, so a random member was dropped anyway.
    Escaped(usize),
    /// Nothing could move (empty clique with every node tabu).
    Idle,
}

/// What happened during one call to
/// [`SearchState::step`](super::SearchState::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// The add/drop/escape move taken.
    pub action: StepMove,
    /// Whether a diversification restart replaced the clique afterward.
    pub restarted: bool,
}
