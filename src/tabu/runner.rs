//! Tabu clique search execution engine.
//!
//! # Algorithm
//!
//! 1. Seed the clique with one uniformly random node
//! 2. While steps remain and the best clique is smaller than the graph:
//!    a. Add, drop or force-drop a node (see [`SearchState::step`])
//!    b. Restart from an unexplored node when stalled
//!    c. Adapt the prohibition period to the observed cycling
//! 3. Return the best clique seen, sorted ascending
//!
//! # Reference
//!
//! Battiti, R. & Protasi, M. (2001). "Reactive local search for the maximum
//! clique problem", *Algorithmica* 29(4), 610-637.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::debug;
use rand::Rng;
use u_numflow::random::create_rng;

use super::config::TabuCliqueConfig;
use super::error::TabuError;
use super::state::SearchState;
use crate::graph::Graph;

/// Result of a tabu clique search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuCliqueResult {
    /// Best clique found, sorted ascending.
    pub clique: Vec<usize>,
    /// Total steps executed.
    pub steps: usize,
    /// Step at which the best clique was found (0 = the seed node).
    pub best_step: usize,
    /// Number of diversification restarts.
    pub restarts: usize,
    /// Prohibition period when the search stopped.
    pub final_prohibition_period: usize,
    /// Best clique size after each step.
    pub size_history: Vec<usize>,
}

/// Tabu search for a maximum clique.
pub struct TabuCliqueSearch;

impl TabuCliqueSearch {
    /// Runs the search with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_clique::graph::Graph;
    /// use u_clique::tabu::{TabuCliqueConfig, TabuCliqueSearch};
    ///
    /// let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]).unwrap();
    /// let config = TabuCliqueConfig::default().with_max_steps(200).with_seed(42);
    ///
    /// let result = TabuCliqueSearch::run(&graph, &config).unwrap();
    /// assert_eq!(result.clique, vec![0, 1, 2]);
    /// ```
    pub fn run(graph: &Graph, config: &TabuCliqueConfig) -> Result<TabuCliqueResult, TabuError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(graph, config, &mut rng)
    }

    /// Runs the search drawing every random choice from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// - [`TabuError::ZeroStepBudget`] / [`TabuError::InvalidConfig`] for a bad config
    /// - [`TabuError::EmptyGraph`] if the graph has no nodes
    pub fn run_with_rng<R: Rng>(
        graph: &Graph,
        config: &TabuCliqueConfig,
        rng: &mut R,
    ) -> Result<TabuCliqueResult, TabuError> {
        config.validate()?;
        let mut state = SearchState::new(graph, config, rng)?;

        let mut size_history = Vec::new();
        while !state.is_finished(config.max_steps) {
            state.step(rng);
            size_history.push(state.best_clique().len());
        }

        debug!(
            "tabu search on {} nodes: best size {} at step {} of {}, {} restarts",
            graph.node_count(),
            state.best_clique().len(),
            state.time_of_best(),
            state.time(),
            state.restarts()
        );

        Ok(TabuCliqueResult {
            steps: state.time(),
            best_step: state.time_of_best(),
            restarts: state.restarts(),
            final_prohibition_period: state.prohibition_period(),
            size_history,
            clique: state.into_best(),
        })
    }
}

/// Finds a large clique within `max_steps` steps using default factors.
///
/// The returned nodes are distinct, pairwise adjacent and sorted
/// ascending. The size is not guaranteed to be maximum; certify it with
/// [`ExactCliqueVerifier`](crate::exhaustive::ExactCliqueVerifier).
///
/// # Examples
///
/// ```
/// use u_clique::graph::Graph;
/// use u_clique::tabu::find_maximum_clique;
/// use u_numflow::random::create_rng;
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
/// let mut rng = create_rng(1);
/// assert_eq!(find_maximum_clique(&graph, 100, &mut rng).unwrap(), vec![0, 1, 2]);
/// ```
pub fn find_maximum_clique<R: Rng>(
    graph: &Graph,
    max_steps: usize,
    rng: &mut R,
) -> Result<Vec<usize>, TabuError> {
    let config = TabuCliqueConfig::default().with_max_steps(max_steps);
    Ok(TabuCliqueSearch::run_with_rng(graph, &config, rng)?.clique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::ExactCliqueVerifier;

    fn complete(n: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();
        Graph::from_edges(n, &edges).unwrap()
    }

    // Circulant graph: i ~ j when their cyclic distance is in `jumps`.
    fn circulant(n: usize, jumps: &[usize]) -> Graph {
        let mut edges = Vec::new();
        for i in 0..n {
            for &d in jumps {
                edges.push((i, (i + d) % n));
            }
        }
        Graph::from_edges(n, &edges).unwrap()
    }

    // 12 nodes with a hidden 5-clique {2, 5, 7, 9, 11} on top of a sparse ring.
    fn planted() -> Graph {
        let mut edges: Vec<(usize, usize)> = (0..12).map(|i| (i, (i + 1) % 12)).collect();
        let hidden = [2, 5, 7, 9, 11];
        for (i, &a) in hidden.iter().enumerate() {
            for &b in &hidden[i + 1..] {
                edges.push((a, b));
            }
        }
        edges.extend([(0, 3), (1, 4), (3, 6), (0, 6)]);
        Graph::from_edges(12, &edges).unwrap()
    }

    #[test]
    fn test_empty_graph_rejected() {
        let config = TabuCliqueConfig::default().with_seed(42);
        assert_eq!(
            TabuCliqueSearch::run(&Graph::empty(0).unwrap(), &config).unwrap_err(),
            TabuError::EmptyGraph
        );
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut rng = create_rng(42);
        assert_eq!(
            find_maximum_clique(&complete(3), 0, &mut rng).unwrap_err(),
            TabuError::ZeroStepBudget
        );
    }

    #[test]
    fn test_single_node_returns_it_without_steps() {
        let g = Graph::empty(1).unwrap();
        let result = TabuCliqueSearch::run(&g, &TabuCliqueConfig::default().with_seed(42)).unwrap();
        assert_eq!(result.clique, vec![0]);
        assert_eq!(result.steps, 0);
        assert!(result.size_history.is_empty());
    }

    #[test]
    fn test_complete_graph_stops_early() {
        let g = complete(5);
        let config = TabuCliqueConfig::default().with_max_steps(1_000).with_seed(42);
        let result = TabuCliqueSearch::run(&g, &config).unwrap();
        assert_eq!(result.clique, vec![0, 1, 2, 3, 4]);
        // One add per step from a single seed node.
        assert_eq!(result.steps, 4);
        assert_eq!(result.best_step, 4);
    }

    #[test]
    fn test_edgeless_graph_single_node() {
        let g = Graph::empty(4).unwrap();
        let config = TabuCliqueConfig::default().with_max_steps(300).with_seed(42);
        let result = TabuCliqueSearch::run(&g, &config).unwrap();
        assert_eq!(result.clique.len(), 1);
        assert_eq!(result.steps, 300);
        assert!(result.restarts > 0);
    }

    #[test]
    fn test_finds_planted_clique() {
        let g = planted();
        let config = TabuCliqueConfig::default().with_max_steps(2_000).with_seed(42);
        let result = TabuCliqueSearch::run(&g, &config).unwrap();
        assert_eq!(result.clique, vec![2, 5, 7, 9, 11]);

        let certificate = ExactCliqueVerifier::new(&g).certify(result.clique.len(), true);
        assert!(certificate.is_maximum());
    }

    #[test]
    fn test_circulant_matches_verifier() {
        // C(10; 1, 2) has clique number 3.
        let g = circulant(10, &[1, 2]);
        let mut rng = create_rng(42);
        let clique = find_maximum_clique(&g, 500, &mut rng).unwrap();
        assert!(g.is_clique(&clique).unwrap());
        assert_eq!(clique.len(), ExactCliqueVerifier::new(&g).clique_number(true));
    }

    #[test]
    fn test_result_is_sorted_distinct_clique() {
        for seed in 0..10 {
            let g = circulant(13, &[1, 3, 4]);
            let config = TabuCliqueConfig::default().with_max_steps(400).with_seed(seed);
            let result = TabuCliqueSearch::run(&g, &config).unwrap();
            assert!(result.clique.windows(2).all(|w| w[0] < w[1]));
            assert!(g.is_clique(&result.clique).unwrap());
        }
    }

    #[test]
    fn test_size_history_non_decreasing() {
        let g = planted();
        let config = TabuCliqueConfig::default().with_max_steps(500).with_seed(7);
        let result = TabuCliqueSearch::run(&g, &config).unwrap();

        assert_eq!(result.size_history.len(), result.steps);
        for window in result.size_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best size history should be non-decreasing: {} < {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.size_history.last(), Some(&result.clique.len()));
    }

    #[test]
    fn test_same_seed_same_result() {
        let g = circulant(15, &[1, 2, 5]);
        let config = TabuCliqueConfig::default().with_max_steps(300).with_seed(99);
        let a = TabuCliqueSearch::run(&g, &config).unwrap();
        let b = TabuCliqueSearch::run(&g, &config).unwrap();
        assert_eq!(a.clique, b.clique);
        assert_eq!(a.size_history, b.size_history);
        assert_eq!(a.restarts, b.restarts);
    }

    #[test]
    fn test_short_restart_factor_restarts_more() {
        let g = circulant(16, &[1, 2, 3]);
        let eager = TabuCliqueConfig::default()
            .with_max_steps(1_000)
            .with_restart_factor(2)
            .with_seed(42);
        let result = TabuCliqueSearch::run(&g, &eager).unwrap();
        assert!(result.restarts > 0);
        assert!(result.final_prohibition_period >= 1);
    }
}
