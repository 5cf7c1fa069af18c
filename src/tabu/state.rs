//! Search memory and the single step function of the tabu clique search.
//!
//! A step runs five phases against the state:
//!
//! 1. **Add** the non-tabu possible-add node with the most neighbors inside
//!    the possible-add set.
//! 2. **Drop** (if nothing was added) the non-tabu member that is
//!    non-adjacent to the most one-missing nodes.
//! 3. **Escape** (if nothing moved) by dropping a random member, tabu or not.
//! 4. **Restart** from a single seed node once the search has stalled for
//!    `restart_factor * best_size` steps since both the last improvement
//!    and the last restart.
//! 5. **Adapt tenure**: revisiting a clique within `2(n - 1)` steps raises
//!    the prohibition period; a long quiet spell lowers it.
//!
//! Ties are always broken uniformly at random. Clique membership and both
//! candidate sets are bitsets over the nodes, so every score is a row
//! intersection count.

use std::collections::HashMap;

use fixedbitset::FixedBitSet;
use log::{debug, trace};
use rand::Rng;

use super::config::TabuCliqueConfig;
use super::error::TabuError;
use super::types::{StepMove, StepReport};
use crate::graph::Graph;

/// Mutable memory of one tabu clique search run.
///
/// `members` is the current clique; `clique` mirrors it as a sorted list.
/// The candidate sets always describe the current clique.
#[derive(Debug, Clone)]
pub struct SearchState<'g> {
    graph: &'g Graph,

    restart_factor: usize,
    tenure_decay_factor: usize,
    tenure_cap_factor: usize,

    time: usize,
    members: FixedBitSet,
    clique: Vec<usize>,
    possible_add: FixedBitSet,
    one_missing: FixedBitSet,

    /// Step at which each node last entered or left the clique.
    last_moved: Vec<Option<usize>>,
    prohibition_period: usize,
    tenure_changed_at: usize,
    /// Last step at which each exact clique was current.
    visit_history: HashMap<FixedBitSet, usize>,

    best_clique: Vec<usize>,
    time_of_best: usize,
    time_of_last_restart: usize,
    restarts: usize,
}

impl<'g> SearchState<'g> {
    /// Starts a search at a uniformly random single node.
    ///
    /// # Errors
    ///
    /// - [`TabuError::ZeroStepBudget`] / [`TabuError::InvalidConfig`] for a bad config
    /// - [`TabuError::EmptyGraph`] if the graph has no nodes
    pub fn new<R: Rng>(
        graph: &'g Graph,
        config: &TabuCliqueConfig,
        rng: &mut R,
    ) -> Result<Self, TabuError> {
        config.validate()?;
        if graph.node_count() == 0 {
            return Err(TabuError::EmptyGraph);
        }
        let seed = rng.random_range(0..graph.node_count());
        Ok(Self::starting_at(graph, config, seed))
    }

    fn starting_at(graph: &'g Graph, config: &TabuCliqueConfig, seed: usize) -> Self {
        let n = graph.node_count();
        let mut members = FixedBitSet::with_capacity(n);
        members.insert(seed);

        let mut state = Self {
            graph,
            restart_factor: config.restart_factor,
            tenure_decay_factor: config.tenure_decay_factor,
            tenure_cap_factor: config.tenure_cap_factor,
            time: 0,
            members,
            clique: vec![seed],
            possible_add: FixedBitSet::with_capacity(n),
            one_missing: FixedBitSet::with_capacity(n),
            last_moved: vec![None; n],
            prohibition_period: 1,
            tenure_changed_at: 0,
            visit_history: HashMap::new(),
            best_clique: vec![seed],
            time_of_best: 0,
            time_of_last_restart: 0,
            restarts: 0,
        };
        state.refresh_candidates();
        state
    }

    /// Current logical time (number of steps taken).
    pub fn time(&self) -> usize {
        self.time
    }

    /// Current clique, sorted ascending.
    pub fn clique(&self) -> &[usize] {
        &self.clique
    }

    /// Best clique seen so far, sorted ascending.
    pub fn best_clique(&self) -> &[usize] {
        &self.best_clique
    }

    /// Step at which the best clique was found.
    pub fn time_of_best(&self) -> usize {
        self.time_of_best
    }

    /// Current tabu tenure.
    pub fn prohibition_period(&self) -> usize {
        self.prohibition_period
    }

    /// Nodes adjacent to every member of the current clique, ascending.
    pub fn possible_add(&self) -> Vec<usize> {
        self.possible_add.ones().collect()
    }

    /// Non-members adjacent to all but exactly one member, ascending.
    pub fn one_missing(&self) -> Vec<usize> {
        self.one_missing.ones().collect()
    }

    /// Number of diversification restarts so far.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Whether `node` may not be moved at the current time.
    pub fn is_tabu(&self, node: usize) -> bool {
        self.last_moved[node].is_some_and(|moved| self.time <= moved + self.prohibition_period)
    }

    /// Whether the budget is spent or the whole graph is already a clique.
    pub fn is_finished(&self, max_steps: usize) -> bool {
        self.time >= max_steps || self.best_clique.len() >= self.graph.node_count()
    }

    /// Consumes the state, returning the best clique.
    pub fn into_best(self) -> Vec<usize> {
        self.best_clique
    }

    /// Advances logical time by one and runs every phase once.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> StepReport {
        self.time += 1;

        let action = if let Some(node) = self.try_add(rng) {
            StepMove::Added(node)
        } else if let Some(node) = self.try_drop(rng) {
            StepMove::Dropped(node)
        } else if let Some(node) = self.force_escape(rng) {
            StepMove::Escaped(node)
        } else {
            StepMove::Idle
        };

        let restarted = self.restart_if_stalled(rng);
        self.refresh_candidates();
        self.update_prohibition_period();

        StepReport { action, restarted }
    }

    fn try_add<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        let allowed: Vec<usize> = self
            .possible_add
            .ones()
            .filter(|&node| !self.is_tabu(node))
            .collect();

        let graph = self.graph;
        let possible_add = &self.possible_add;
        let node = pick_max(
            &allowed,
            |node| graph.row(node).intersection(possible_add).count(),
            rng,
        )?;

        self.members.insert(node);
        self.sync_clique();
        self.last_moved[node] = Some(self.time);

        if self.clique.len() > self.best_clique.len() {
            self.best_clique.clone_from(&self.clique);
            self.time_of_best = self.time;
            debug!(
                "step {}: new best clique of size {}",
                self.time,
                self.best_clique.len()
            );
        }
        Some(node)
    }

    fn try_drop<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        let allowed: Vec<usize> = self
            .clique
            .iter()
            .copied()
            .filter(|&node| !self.is_tabu(node))
            .collect();

        // Dropping the member missed by the most one-missing nodes frees
        // the most of them to become addable.
        let graph = self.graph;
        let one_missing = &self.one_missing;
        let missing_total = one_missing.count_ones(..);
        let node = pick_max(
            &allowed,
            |node| missing_total - graph.row(node).intersection(one_missing).count(),
            rng,
        )?;

        self.remove_member(node);
        Some(node)
    }

    fn force_escape<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.clique.is_empty() {
            return None;
        }
        let node = self.clique[rng.random_range(0..self.clique.len())];
        self.remove_member(node);
        Some(node)
    }

    fn remove_member(&mut self, node: usize) {
        self.members.set(node, false);
        self.sync_clique();
        self.last_moved[node] = Some(self.time);
    }

    fn sync_clique(&mut self) {
        self.clique.clear();
        self.clique.extend(self.members.ones());
    }

    fn restart_if_stalled<R: Rng>(&mut self, rng: &mut R) -> bool {
        let threshold = self.restart_factor * self.best_clique.len();
        if self.time - self.time_of_best <= threshold
            || self.time - self.time_of_last_restart <= threshold
        {
            return false;
        }

        self.time_of_last_restart = self.time;
        self.prohibition_period = 1;
        self.tenure_changed_at = self.time;
        self.visit_history.clear();
        self.restarts += 1;

        let unmoved: Vec<usize> = (0..self.graph.node_count())
            .filter(|&node| self.last_moved[node].is_none())
            .collect();
        let seed = if unmoved.is_empty() {
            rng.random_range(0..self.graph.node_count())
        } else {
            unmoved[rng.random_range(0..unmoved.len())]
        };

        debug!(
            "step {}: restart #{} from node {seed} ({} nodes never moved)",
            self.time,
            self.restarts,
            unmoved.len()
        );

        self.members.clear();
        self.members.insert(seed);
        self.sync_clique();
        true
    }

    fn refresh_candidates(&mut self) {
        let graph = self.graph;
        let n = graph.node_count();

        // Members are never their own neighbors, so intersecting the rows
        // also excludes them once the clique is non-empty.
        self.possible_add.clear();
        self.possible_add.insert_range(..);
        for member in self.members.ones() {
            self.possible_add.intersect_with(graph.row(member));
        }

        self.one_missing.clear();
        if let Some(needed) = self.clique.len().checked_sub(1) {
            for node in 0..n {
                if !self.members.contains(node)
                    && graph.degrees()[node] >= needed
                    && graph.row(node).intersection(&self.members).count() == needed
                {
                    self.one_missing.insert(node);
                }
            }
        }
    }

    fn update_prohibition_period(&mut self) {
        let best_size = self.best_clique.len();
        let cycle_window = 2 * (self.graph.node_count() - 1);

        match self.visit_history.get_mut(&self.members) {
            Some(last_seen) => {
                let gap = self.time - *last_seen;
                *last_seen = self.time;
                if gap < cycle_window {
                    self.tenure_changed_at = self.time;
                    self.prohibition_period =
                        (self.prohibition_period + 1).min(self.tenure_cap_factor * best_size);
                    trace!(
                        "step {}: clique revisited after {gap} steps, tenure -> {}",
                        self.time,
                        self.prohibition_period
                    );
                }
            }
            None => {
                self.visit_history.insert(self.members.clone(), self.time);
            }
        }

        if self.time - self.tenure_changed_at > self.tenure_decay_factor * best_size {
            self.tenure_changed_at = self.time;
            self.prohibition_period = self.prohibition_period.saturating_sub(1).max(1);
            trace!(
                "step {}: tenure decayed to {}",
                self.time,
                self.prohibition_period
            );
        }
    }
}

/// Picks uniformly among the candidates with the highest score.
fn pick_max<R, F>(candidates: &[usize], score: F, rng: &mut R) -> Option<usize>
where
    R: Rng,
    F: Fn(usize) -> usize,
{
    let mut best_score = 0usize;
    let mut ties: Vec<usize> = Vec::new();
    for &node in candidates {
        let s = score(node);
        if ties.is_empty() || s > best_score {
            best_score = s;
            ties.clear();
            ties.push(node);
        } else if s == best_score {
            ties.push(node);
        }
    }
    if ties.is_empty() {
        None
    } else {
        Some(ties[rng.random_range(0..ties.len())])
    }
}
