//! Backtracking k-clique verifier.
//!
//! # Algorithm
//!
//! 1. Optional shortcuts:
//!    a. `k > n` ⇒ no clique
//!    b. `m >= n(n-1)/2` ⇒ the graph itself is a clique
//!    c. fewer than `k` nodes of degree `>= k - 1` ⇒ no clique
//! 2. Enumerate k-subsets in include-first order over node indices, keeping
//!    the chosen indices on an explicit stack:
//!    a. with `k` nodes chosen, test all pairs; stop on the first clique
//!    b. otherwise include the next node, unless the nodes left cannot
//!       fill the subset, in which case backtrack
//!    c. backtracking pops the last choice and continues with that node
//!       excluded

use log::debug;

use super::types::OptimalityCertificate;
use crate::graph::Graph;

/// Exhaustive decision procedure for "does a clique of size `k` exist?".
///
/// Holds only a shared borrow of the graph, so any number of verifiers
/// may run over the same graph concurrently.
///
/// # Examples
///
/// ```
/// use u_clique::exhaustive::ExactCliqueVerifier;
/// use u_clique::graph::Graph;
///
/// // Two disjoint triangles.
/// let graph = Graph::from_edges(6, &[(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)]).unwrap();
/// let verifier = ExactCliqueVerifier::new(&graph);
/// assert!(verifier.has_clique_of_size(3, true));
/// assert!(!verifier.has_clique_of_size(4, true));
/// assert_eq!(verifier.find_clique_of_size(3, false), Some(vec![0, 1, 2]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExactCliqueVerifier<'g> {
    graph: &'g Graph,
}

impl<'g> ExactCliqueVerifier<'g> {
    /// Creates a verifier over `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Returns whether the graph contains a clique of exactly `k` nodes
    /// (and therefore of every size up to `k`).
    ///
    /// `k = 0` is always satisfied. `use_pruning` never changes the answer.
    pub fn has_clique_of_size(&self, k: usize, use_pruning: bool) -> bool {
        self.find_clique_of_size(k, use_pruning).is_some()
    }

    /// Returns the first `k`-clique in enumeration order, i.e. the
    /// lexicographically smallest one, or `None` if there is none.
    ///
    /// When the complete-graph shortcut fires the witness is `0..k`.
    pub fn find_clique_of_size(&self, k: usize, use_pruning: bool) -> Option<Vec<usize>> {
        if use_pruning {
            match self.shortcut(k) {
                Some(true) => return Some((0..k).collect()),
                Some(false) => return None,
                None => {}
            }
        }
        self.enumerate(k)
    }

    /// Size of the largest clique, found by raising `k` until no clique of
    /// that size exists. `0` for a graph without nodes.
    pub fn clique_number(&self, use_pruning: bool) -> usize {
        let mut k = 0;
        while k < self.graph.node_count() && self.has_clique_of_size(k + 1, use_pruning) {
            k += 1;
        }
        k
    }

    /// Checks whether `size` is the clique number by asking for cliques of
    /// `size` and `size + 1`.
    pub fn certify(&self, size: usize, use_pruning: bool) -> OptimalityCertificate {
        OptimalityCertificate {
            size,
            has_size: self.has_clique_of_size(size, use_pruning),
            has_larger: self.has_clique_of_size(size + 1, use_pruning),
        }
    }

    /// Decides `k` without enumeration when a cheap bound settles it.
    fn shortcut(&self, k: usize) -> Option<bool> {
        let n = self.graph.node_count();

        if k > n {
            debug!("k = {k} exceeds node count {n}");
            return Some(false);
        }

        if self.graph.edge_count() >= self.graph.max_edge_count() {
            debug!("graph on {n} nodes is complete, k = {k} trivially satisfied");
            return Some(true);
        }

        // A member of a k-clique has at least k - 1 neighbors.
        let min_degree = k.saturating_sub(1);
        let eligible = self
            .graph
            .degrees()
            .iter()
            .filter(|&&d| d >= min_degree)
            .count();
        if eligible < k {
            debug!("only {eligible} nodes have degree >= {min_degree}, no {k}-clique");
            return Some(false);
        }

        None
    }

    fn enumerate(&self, k: usize) -> Option<Vec<usize>> {
        let n = self.graph.node_count();
        let mut chosen: Vec<usize> = Vec::with_capacity(k);
        let mut next = 0usize;

        loop {
            let complete = chosen.len() == k;
            if complete && self.all_adjacent(&chosen) {
                return Some(chosen);
            }

            if complete || n - next < k - chosen.len() {
                // Exclude branch of the most recent inclusion.
                next = chosen.pop()? + 1;
                continue;
            }

            chosen.push(next);
            next += 1;
        }
    }

    fn all_adjacent(&self, nodes: &[usize]) -> bool {
        nodes.iter().enumerate().all(|(i, &a)| {
            nodes[i + 1..]
                .iter()
                .all(|&b| self.graph.adjacent(a, b))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(n: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();
        Graph::from_edges(n, &edges).unwrap()
    }

    fn two_triangles() -> Graph {
        Graph::from_edges(6, &[(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)]).unwrap()
    }

    // 0-1-2-3 square with diagonal 0-2, plus pendant 4 on 3.
    fn kite() -> Graph {
        Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (3, 4)]).unwrap()
    }

    #[test]
    fn test_zero_is_always_satisfied() {
        for g in [Graph::empty(0).unwrap(), Graph::empty(3).unwrap(), complete(4)] {
            let v = ExactCliqueVerifier::new(&g);
            assert!(v.has_clique_of_size(0, true));
            assert!(v.has_clique_of_size(0, false));
            assert_eq!(v.find_clique_of_size(0, false), Some(vec![]));
        }
    }

    #[test]
    fn test_one_needs_a_node() {
        let none = Graph::empty(0).unwrap();
        let v = ExactCliqueVerifier::new(&none);
        assert!(!v.has_clique_of_size(1, true));
        assert!(!v.has_clique_of_size(1, false));

        let single = Graph::empty(1).unwrap();
        let v = ExactCliqueVerifier::new(&single);
        assert!(v.has_clique_of_size(1, true));
        assert!(v.has_clique_of_size(1, false));
        assert!(!v.has_clique_of_size(2, true));
        assert!(!v.has_clique_of_size(2, false));
    }

    #[test]
    fn test_complete_graph() {
        let g = complete(5);
        let v = ExactCliqueVerifier::new(&g);
        assert!(v.has_clique_of_size(5, true));
        assert!(v.has_clique_of_size(5, false));
        assert!(!v.has_clique_of_size(6, true));
        assert!(!v.has_clique_of_size(6, false));
        assert_eq!(v.find_clique_of_size(3, true), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_edgeless_graph() {
        let g = Graph::empty(4).unwrap();
        let v = ExactCliqueVerifier::new(&g);
        assert!(v.has_clique_of_size(1, true));
        assert!(!v.has_clique_of_size(2, true));
        assert!(!v.has_clique_of_size(2, false));
    }

    #[test]
    fn test_two_triangles() {
        let g = two_triangles();
        let v = ExactCliqueVerifier::new(&g);
        assert!(v.has_clique_of_size(3, true));
        assert!(!v.has_clique_of_size(4, true));
        assert!(!v.has_clique_of_size(4, false));
        assert_eq!(v.clique_number(true), 3);
    }

    #[test]
    fn test_witness_is_first_in_index_order() {
        let g = kite();
        let v = ExactCliqueVerifier::new(&g);
        assert_eq!(v.find_clique_of_size(3, false), Some(vec![0, 1, 2]));
        assert_eq!(v.find_clique_of_size(2, false), Some(vec![0, 1]));
        assert_eq!(v.find_clique_of_size(4, false), None);

        let witness = v.find_clique_of_size(3, true).unwrap();
        assert!(g.is_clique(&witness).unwrap());
    }

    #[test]
    fn test_witness_skips_leading_nodes() {
        // Only clique of size 3 is {2, 3, 4}.
        let g = Graph::from_edges(5, &[(0, 1), (2, 3), (2, 4), (3, 4)]).unwrap();
        let v = ExactCliqueVerifier::new(&g);
        assert_eq!(v.find_clique_of_size(3, false), Some(vec![2, 3, 4]));
    }

    #[test]
    fn test_pruning_never_changes_answer() {
        for g in [Graph::empty(4).unwrap(), complete(5), two_triangles(), kite()] {
            let v = ExactCliqueVerifier::new(&g);
            for k in 0..=g.node_count() + 2 {
                assert_eq!(
                    v.has_clique_of_size(k, true),
                    v.has_clique_of_size(k, false),
                    "pruning changed answer for k = {k}"
                );
            }
        }
    }

    #[test]
    fn test_degree_shortcut_rules_out() {
        // Star: hub 0 has degree 4, leaves have degree 1.
        let g = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        let v = ExactCliqueVerifier::new(&g);
        assert_eq!(v.shortcut(3), Some(false));
        assert_eq!(v.shortcut(2), None);
        assert!(v.has_clique_of_size(2, true));
    }

    #[test]
    fn test_clique_number() {
        assert_eq!(ExactCliqueVerifier::new(&Graph::empty(0).unwrap()).clique_number(true), 0);
        assert_eq!(ExactCliqueVerifier::new(&Graph::empty(3).unwrap()).clique_number(false), 1);
        assert_eq!(ExactCliqueVerifier::new(&kite()).clique_number(false), 3);
        assert_eq!(ExactCliqueVerifier::new(&complete(6)).clique_number(true), 6);
    }

    #[test]
    fn test_certify() {
        let g = kite();
        let v = ExactCliqueVerifier::new(&g);

        let exact = v.certify(3, true);
        assert!(exact.has_size && !exact.has_larger);
        assert!(exact.is_maximum());

        let low = v.certify(2, true);
        assert!(low.has_size && low.has_larger);
        assert!(!low.is_maximum());

        let high = v.certify(4, false);
        assert!(!high.has_size);
        assert!(!high.is_maximum());
    }
}
