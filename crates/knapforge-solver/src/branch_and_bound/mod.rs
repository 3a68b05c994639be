//! Exact search using branch-and-bound.
//!
//! Supports real-valued weights and capacity. Candidates are sorted by value
//! density, each tree level decides one candidate (include branch before
//! exclude branch), and nodes whose LP-relaxation bound cannot strictly beat
//! the incumbent are pruned.
//!
//! # Exploration Types
//!
//! - **Depth First**: Explores deepest nodes first (memory efficient)
//! - **Best Bound First**: Explores most promising bounds first

mod bounder;
mod node;

use std::collections::BinaryHeap;

use knapforge_config::{BranchAndBoundConfig, ExplorationType};
use knapforge_core::{Catalog, KnapsackError, Resource, Result, Solution};
use tracing::{debug, trace};

use crate::stats::SolveStats;

pub use bounder::DantzigBounder;
pub use node::{FrontierEntry, SearchNode};

/// Catalog split into items decided up front and items left to the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates {
    /// Weightless items with positive value; always selected.
    pub forced: Vec<usize>,
    /// Catalog indices of searched items in density order.
    pub order: Vec<usize>,
}

impl Candidates {
    /// Partitions `catalog` for `capacity`.
    ///
    /// Zero-value items and items heavier than the capacity are dropped.
    /// Ties in density keep catalog order.
    pub fn new(catalog: &Catalog, capacity: f64) -> Self {
        let mut forced = Vec::new();
        let mut order = Vec::new();
        for (index, item) in catalog.iter().enumerate() {
            if item.value() <= 0.0 || item.weight() > capacity {
                continue;
            }
            if item.weight() == 0.0 {
                forced.push(index);
            } else {
                order.push(index);
            }
        }
        order.sort_by(|&a, &b| catalog[b].density().total_cmp(&catalog[a].density()));
        Self { forced, order }
    }

    /// Builds the bounder over the searched items.
    pub fn bounder(&self, catalog: &Catalog, capacity: f64) -> DantzigBounder {
        DantzigBounder::new(
            self.order.iter().map(|&i| catalog[i].weight()).collect(),
            self.order.iter().map(|&i| catalog[i].value()).collect(),
            capacity,
        )
    }
}

/// Branch-and-bound search over one catalog and capacity.
///
/// # Example
///
/// ```
/// use knapforge_config::BranchAndBoundConfig;
/// use knapforge_core::Catalog;
/// use knapforge_config::AlgorithmType;
/// use knapforge_solver::branch_and_bound::BranchAndBound;
/// use knapforge_solver::SolveStats;
///
/// let catalog = Catalog::new([(2.5, 3.0), (1.5, 2.0), (1.0, 1.5)]).unwrap();
/// let mut stats = SolveStats::new(AlgorithmType::BranchAndBound);
/// let solution = BranchAndBound::new(&catalog, 2.6, &BranchAndBoundConfig::default())
///     .solve(&mut stats)
///     .unwrap();
///
/// assert_eq!(solution.selected_items(), &[1, 2]);
/// assert_eq!(solution.total_value(), 3.5);
/// ```
#[derive(Debug)]
pub struct BranchAndBound<'a> {
    catalog: &'a Catalog,
    candidates: Candidates,
    bounder: DantzigBounder,
    exploration_type: ExplorationType,
    node_limit: Option<u64>,
}

impl<'a> BranchAndBound<'a> {
    /// Prepares a search; `capacity` must be non-negative and finite.
    pub fn new(catalog: &'a Catalog, capacity: f64, config: &BranchAndBoundConfig) -> Self {
        let candidates = Candidates::new(catalog, capacity);
        let bounder = candidates.bounder(catalog, capacity);
        Self {
            catalog,
            candidates,
            bounder,
            exploration_type: config.exploration_type,
            node_limit: config.node_limit,
        }
    }

    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::ResourceExhausted`] if more than `node_limit`
    /// nodes would be explored. No partial result is produced.
    pub fn solve(self, stats: &mut SolveStats) -> Result<Solution> {
        let total = self.bounder.len();
        let catalog = self.catalog;
        let bounder = &self.bounder;

        // The root holds only the weightless items, so it always fits.
        let root = SearchNode::root(catalog, bounder, self.candidates.forced.clone());
        let mut best_value = root.value();
        let mut best_selection = root.selected().to_vec();

        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut sequence: u64 = 0;
        frontier.push(FrontierEntry::new(root, sequence, self.exploration_type));

        while let Some(FrontierEntry { node, .. }) = frontier.pop() {
            // Bounds are re-checked on pop: the incumbent may have improved
            if node.can_prune(best_value) {
                stats.record_prune();
                continue;
            }

            stats.record_node();
            if let Some(limit) = self.node_limit {
                if stats.nodes_explored > limit {
                    return Err(KnapsackError::ResourceExhausted {
                        resource: Resource::SearchNodes,
                        requested: stats.nodes_explored,
                        limit,
                    });
                }
            }

            if node.is_leaf(total) {
                continue;
            }

            let depth = node.depth();
            let include = node.include(catalog, bounder, self.candidates.order[depth]);
            if let Some(child) = &include {
                if child.value() > best_value {
                    best_value = child.value();
                    best_selection = child.selected().to_vec();
                    stats.record_incumbent();
                    trace!(event = "incumbent", value = best_value, depth = depth + 1);
                }
            }
            let exclude = node.exclude(bounder);

            // Include is pushed last so depth-first pops it first
            for child in [Some(exclude), include].into_iter().flatten() {
                if child.can_prune(best_value) {
                    stats.record_prune();
                    continue;
                }
                sequence += 1;
                frontier.push(FrontierEntry::new(child, sequence, self.exploration_type));
            }
        }

        debug!(
            event = "search_end",
            candidates = total,
            forced = self.candidates.forced.len(),
            nodes_explored = stats.nodes_explored,
            nodes_pruned = stats.nodes_pruned,
            prune_rate = stats.prune_rate(),
            best_value,
        );

        Ok(Solution::from_selection(catalog, best_selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapforge_config::AlgorithmType;
    use knapforge_test::{assert_feasible, brute_force_best_value};

    fn stats() -> SolveStats {
        SolveStats::new(AlgorithmType::BranchAndBound)
    }

    fn run(catalog: &Catalog, capacity: f64, config: &BranchAndBoundConfig) -> Result<Solution> {
        BranchAndBound::new(catalog, capacity, config).solve(&mut stats())
    }

    #[test]
    fn test_candidates_partition_and_order() {
        let catalog = Catalog::new([
            (5.0, 10.0),
            (0.0, 3.0),
            (4.0, 40.0),
            (2.0, 0.0),
            (20.0, 99.0),
            (2.0, 20.0),
        ])
        .unwrap();
        let candidates = Candidates::new(&catalog, 10.0);
        assert_eq!(candidates.forced, vec![1]);
        // Densities: 2 -> 10, 5 -> 10, 0 -> 2; tie keeps catalog order
        assert_eq!(candidates.order, vec![2, 5, 0]);
    }

    #[test]
    fn test_reference_instance() {
        let catalog = Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]).unwrap();
        let solution = run(&catalog, 10.0, &BranchAndBoundConfig::default()).unwrap();
        assert_eq!(solution.selected_items(), &[1, 3]);
        assert_eq!(solution.total_value(), 90.0);
        assert_eq!(solution.total_weight(), 7.0);
    }

    #[test]
    fn test_best_bound_first_agrees() {
        let catalog = Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]).unwrap();
        let config = BranchAndBoundConfig {
            exploration_type: ExplorationType::BestBoundFirst,
            ..Default::default()
        };
        let solution = run(&catalog, 10.0, &config).unwrap();
        assert_eq!(solution.total_value(), 90.0);
    }

    #[test]
    fn test_fractional_weights() {
        let catalog = Catalog::new([(0.5, 1.0), (0.75, 2.0), (1.25, 2.5)]).unwrap();
        let solution = run(&catalog, 1.5, &BranchAndBoundConfig::default()).unwrap();
        assert_eq!(solution.selected_items(), &[0, 1]);
        assert_eq!(solution.total_value(), 3.0);
        assert_eq!(solution.total_weight(), 1.25);
    }

    #[test]
    fn test_forced_weightless_items() {
        let catalog = Catalog::new([(0.0, 4.0), (3.0, 1.0)]).unwrap();
        let solution = run(&catalog, 0.0, &BranchAndBoundConfig::default()).unwrap();
        assert_eq!(solution.selected_items(), &[0]);
        assert_eq!(solution.total_weight(), 0.0);
    }

    #[test]
    fn test_node_limit_exhausted() {
        let catalog =
            Catalog::new((1..=12).map(|i| (i as f64 + 0.5, (i * 7 % 11 + 1) as f64))).unwrap();
        let config = BranchAndBoundConfig {
            node_limit: Some(3),
            ..Default::default()
        };
        let err = run(&catalog, 30.0, &config).unwrap_err();
        assert_eq!(
            err,
            KnapsackError::ResourceExhausted {
                resource: Resource::SearchNodes,
                requested: 4,
                limit: 3,
            }
        );
    }

    #[test]
    fn test_stats_recorded() {
        let catalog = Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]).unwrap();
        let mut stats = stats();
        BranchAndBound::new(&catalog, 10.0, &BranchAndBoundConfig::default())
            .solve(&mut stats)
            .unwrap();
        assert!(stats.nodes_explored > 0);
        assert!(stats.incumbent_updates >= 1);
    }

    #[test]
    fn test_reported_weight_never_exceeds_capacity() {
        // 0.1 + 0.2 + 0.3 sums to just above 0.6 in catalog order.
        let catalog = Catalog::new([(0.1, 0.8), (0.2, 1.8), (0.3, 3.0)]).unwrap();
        for exploration_type in [ExplorationType::DepthFirst, ExplorationType::BestBoundFirst] {
            let config = BranchAndBoundConfig {
                exploration_type,
                ..Default::default()
            };
            let solution = run(&catalog, 0.6, &config).unwrap();
            assert_feasible(&catalog, 0.6, &solution);
            assert_eq!(solution.selected_items(), &[1, 2]);
            assert_eq!(solution.total_value(), brute_force_best_value(&catalog, 0.6));
        }
    }

    #[test]
    fn test_nothing_fits() {
        let catalog = Catalog::new([(5.0, 1.0), (6.0, 2.0)]).unwrap();
        let solution = run(&catalog, 4.0, &BranchAndBoundConfig::default()).unwrap();
        assert!(solution.is_empty());
    }
}
