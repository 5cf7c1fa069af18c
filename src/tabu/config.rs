//! Tabu clique search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::TabuError;

/// Configuration parameters for [`TabuCliqueSearch`](super::TabuCliqueSearch).
///
/// All thresholds scale with the size of the best clique found so far, so
/// the same factors work across graph sizes.
///
/// # Examples
///
/// ```
/// use u_clique::tabu::TabuCliqueConfig;
///
/// let config = TabuCliqueConfig::default()
///     .with_max_steps(2_000)
///     .with_restart_factor(50)
///     .with_seed(7);
/// assert_eq!(config.max_steps, 2_000);
/// assert_eq!(config.restart_factor, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuCliqueConfig {
    /// Step budget (logical time). Must be at least 1.
    pub max_steps: usize,

    /// A restart fires once both the last improvement and the last restart
    /// are more than `restart_factor * best_size` steps in the past.
    pub restart_factor: usize,

    /// The prohibition period shrinks by one after
    /// `tenure_decay_factor * best_size` steps without a tenure change.
    pub tenure_decay_factor: usize,

    /// Upper bound on the prohibition period, as a multiple of the best
    /// clique size.
    pub tenure_cap_factor: usize,

    /// Random seed (None for a fresh seed per run).
    pub seed: Option<u64>,
}

impl Default for TabuCliqueConfig {
    fn default() -> Self {
        Self {
            max_steps: 500,
            restart_factor: 100,
            tenure_decay_factor: 10,
            tenure_cap_factor: 2,
            seed: None,
        }
    }
}

impl TabuCliqueConfig {
    /// Sets the step budget.
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    /// Sets the restart threshold factor.
    pub fn with_restart_factor(mut self, factor: usize) -> Self {
        self.restart_factor = factor;
        self
    }

    /// Sets the tenure decay factor.
    pub fn with_tenure_decay_factor(mut self, factor: usize) -> Self {
        self.tenure_decay_factor = factor;
        self
    }

    /// Sets the tenure cap factor.
    pub fn with_tenure_cap_factor(mut self, factor: usize) -> Self {
        self.tenure_cap_factor = factor;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TabuError> {
        if self.max_steps == 0 {
            return Err(TabuError::ZeroStepBudget);
        }
        if self.restart_factor == 0 {
            return Err(TabuError::InvalidConfig(
                "restart_factor must be positive".into(),
            ));
        }
        if self.tenure_decay_factor == 0 {
            return Err(TabuError::InvalidConfig(
                "tenure_decay_factor must be positive".into(),
            ));
        }
        if self.tenure_cap_factor == 0 {
            return Err(TabuError::InvalidConfig(
                "tenure_cap_factor must be positive".into(),
            ));
        }
        Ok(())
    }
}
