//! Verification outcome types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of checking a candidate clique size for optimality.
///
/// Produced by [`ExactCliqueVerifier::certify`](super::ExactCliqueVerifier::certify),
/// which asks the verifier for cliques of `size` and `size + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimalityCertificate {
    /// The candidate size that was checked.
    pub size: usize,
    /// Whether a clique of `size` nodes exists.
    pub has_size: bool,
    /// Whether a clique of `size + 1` nodes exists.
    pub has_larger: bool,
}

impl OptimalityCertificate {
    /// `size` is the clique number of the graph.
    pub fn is_maximum(&self) -> bool {
        self.has_size && !self.has_larger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_maximum() {
        let exact = OptimalityCertificate {
            size: 3,
            has_size: true,
            has_larger: false,
        };
        assert!(exact.is_maximum());

        let beaten = OptimalityCertificate {
            has_larger: true,
            ..exact
        };
        assert!(!beaten.is_maximum());

        let missing = OptimalityCertificate {
            has_size: false,
            ..exact
        };
        assert!(!missing.is_maximum());
    }
}
