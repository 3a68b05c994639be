//! LP-relaxation bound for branch-and-bound pruning.
//!
//! With candidates sorted by value density, the best fractional completion
//! of a partial selection takes the remaining items greedily and a fraction
//! of the first one that does not fit (the Dantzig bound). No integral
//! completion can beat it.

/// Candidate items in density order, as parallel weight/value slices.
#[derive(Debug, Clone)]
pub struct DantzigBounder {
    weights: Vec<f64>,
    values: Vec<f64>,
    capacity: f64,
}

impl DantzigBounder {
    /// Creates a bounder over candidates already sorted by density.
    pub fn new(weights: Vec<f64>, values: Vec<f64>, capacity: f64) -> Self {
        debug_assert_eq!(weights.len(), values.len());
        Self {
            weights,
            values,
            capacity,
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns whether there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of the candidate at `depth`.
    #[inline]
    pub fn weight(&self, depth: usize) -> f64 {
        self.weights[depth]
    }

    /// Value of the candidate at `depth`.
    #[inline]
    pub fn value(&self, depth: usize) -> f64 {
        self.values[depth]
    }

    /// Capacity the bound is computed against.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Upper bound on any completion of a node that has decided the first
    /// `depth` candidates, holding `value` with `weight` used.
    pub fn optimistic_bound(&self, depth: usize, value: f64, weight: f64) -> f64 {
        let mut remaining = self.capacity - weight;
        let mut bound = value;
        for j in depth..self.weights.len() {
            let w = self.weights[j];
            if w <= remaining {
                remaining -= w;
                bound += self.values[j];
            } else {
                bound += self.values[j] * (remaining / w);
                break;
            }
        }
        bound
    }
}
