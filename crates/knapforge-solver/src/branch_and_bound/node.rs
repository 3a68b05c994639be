//! Branch-and-bound node representation.
//!
//! Each node owns its selection as ascending catalog indices and sums it in
//! catalog order, the same order [`Solution`](knapforge_core::Solution)
//! reports. Feasibility is decided on that sum, so a node that fits is a
//! solution that fits. Nodes are dropped once popped and expanded; memory
//! follows the frontier.

use std::cmp::Ordering;

use knapforge_config::ExplorationType;
use knapforge_core::Catalog;

use super::bounder::DantzigBounder;

/// A partial selection in the search tree.
///
/// A node at depth `k` has decided candidates `0..k`. Every node is itself
/// a feasible selection (undecided candidates excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    /// Number of candidates decided.
    depth: usize,
    /// Selected catalog indices, ascending.
    selected: Vec<usize>,
    /// Value of the selection, summed in catalog order.
    value: f64,
    /// Weight of the selection, summed in catalog order.
    weight: f64,
    /// Optimistic bound on any completion of this node.
    bound: f64,
}

impl SearchNode {
    /// Creates the root node holding the always-selected items.
    pub fn root(catalog: &Catalog, bounder: &DantzigBounder, mut forced: Vec<usize>) -> Self {
        forced.sort_unstable();
        Self::new(catalog, bounder, 0, forced)
    }

    fn new(catalog: &Catalog, bounder: &DantzigBounder, depth: usize, selected: Vec<usize>) -> Self {
        let (value, weight) = totals(catalog, &selected);
        Self {
            depth,
            selected,
            value,
            weight,
            bound: bounder.optimistic_bound(depth, value, weight),
        }
    }

    /// Child that selects `catalog_index` as the candidate at this depth.
    ///
    /// Returns `None` when the enlarged selection no longer fits.
    pub fn include(
        &self,
        catalog: &Catalog,
        bounder: &DantzigBounder,
        catalog_index: usize,
    ) -> Option<Self> {
        let mut selected = Vec::with_capacity(self.selected.len() + 1);
        selected.extend_from_slice(&self.selected);
        let position = selected.partition_point(|&i| i < catalog_index);
        selected.insert(position, catalog_index);

        let child = Self::new(catalog, bounder, self.depth + 1, selected);
        (child.weight <= bounder.capacity()).then_some(child)
    }

    /// Child that skips the candidate at this depth.
    pub fn exclude(self, bounder: &DantzigBounder) -> Self {
        let depth = self.depth + 1;
        Self {
            depth,
            bound: bounder.optimistic_bound(depth, self.value, self.weight),
            ..self
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn bound(&self) -> f64 {
        self.bound
    }

    #[inline]
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Returns whether every candidate has been decided.
    pub fn is_leaf(&self, total_candidates: usize) -> bool {
        self.depth >= total_candidates
    }

    /// A node can be pruned when its bound cannot strictly beat `best_value`.
    pub fn can_prune(&self, best_value: f64) -> bool {
        self.bound <= best_value
    }
}

/// Sums an ascending selection the way `Solution::from_selection` does.
fn totals(catalog: &Catalog, selected: &[usize]) -> (f64, f64) {
    let mut value = 0.0;
    let mut weight = 0.0;
    for &index in selected {
        let item = &catalog[index];
        value += item.value();
        weight += item.weight();
    }
    (value, weight)
}

/// A frontier entry ordered by the exploration type.
///
/// `sequence` is the creation order of the node; it breaks every tie so the
/// exploration order is fully deterministic.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub node: SearchNode,
    pub sequence: u64,
    pub exploration_type: ExplorationType,
}

impl FrontierEntry {
    pub fn new(node: SearchNode, sequence: u64, exploration_type: ExplorationType) -> Self {
        Self {
            node,
            sequence,
            exploration_type,
        }
    }
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.exploration_type {
            ExplorationType::DepthFirst => {
                // Deeper first, then most recently created
                self.node
                    .depth
                    .cmp(&other.node.depth)
                    .then_with(|| self.sequence.cmp(&other.sequence))
            }
            ExplorationType::BestBoundFirst => {
                // Higher bound first, then oldest
                self.node
                    .bound
                    .total_cmp(&other.node.bound)
                    .then_with(|| other.sequence.cmp(&self.sequence))
            }
        }
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
