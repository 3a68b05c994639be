//! Integer-weight dynamic programming.
//!
//! `best[i][w]` is the maximum value reachable with items `0..i` under the
//! weight budget `w`. The table is one flat row-major allocation; row `i + 1`
//! depends only on row `i`, so wide rows are filled in parallel over the
//! weight dimension.
//!
//! Weights heavier than the capacity never enter the table, and the weight
//! dimension is clamped to the total weight of the items that do fit, which
//! leaves `best[n][W]` unchanged.

use knapforge_config::SolverConfig;
use knapforge_core::{Catalog, KnapsackError, Resource, Result, Solution, WeightSubject};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::stats::SolveStats;

/// Integer view of a catalog under one capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerProblem {
    /// Integer weight per item; `None` when the item exceeds the capacity.
    pub weights: Vec<Option<usize>>,
    /// Effective capacity: `min(capacity, sum of fitting weights)`.
    pub capacity: usize,
}

impl IntegerProblem {
    /// Converts weights and capacity to the integer domain and checks the
    /// table size against `max_table_cells`.
    ///
    /// # Errors
    ///
    /// - [`KnapsackError::UnsupportedWeightDomain`] for a fractional capacity
    ///   or any fractional item weight, whether or not the item fits.
    /// - [`KnapsackError::ResourceExhausted`] when `(n + 1) * (W + 1)` exceeds
    ///   the ceiling. Weights too large for the table land here too.
    pub fn new(catalog: &Catalog, capacity: f64, max_table_cells: u64) -> Result<Self> {
        if capacity.fract() != 0.0 {
            return Err(KnapsackError::UnsupportedWeightDomain {
                subject: WeightSubject::Capacity,
                value: capacity,
            });
        }

        let mut fitting_total: u64 = 0;
        let weights = catalog
            .weights()
            .enumerate()
            .map(|(index, weight)| {
                if weight.fract() != 0.0 {
                    return Err(KnapsackError::UnsupportedWeightDomain {
                        subject: WeightSubject::Item(index),
                        value: weight,
                    });
                }
                if weight > capacity {
                    return Ok(None);
                }
                // Saturating; no table can reach u64::MAX cells.
                let weight = weight as u64;
                fitting_total = fitting_total.saturating_add(weight);
                Ok(Some(weight))
            })
            .collect::<Result<Vec<_>>>()?;

        // Saturating float-to-int cast; anything above u64::MAX is clamped
        // by the fitting total anyway.
        let capacity = (capacity as u64).min(fitting_total);
        let rows = catalog.len() as u64 + 1;
        let requested = capacity
            .checked_add(1)
            .and_then(|width| width.checked_mul(rows))
            .unwrap_or(u64::MAX);
        if requested > max_table_cells {
            return Err(KnapsackError::ResourceExhausted {
                resource: Resource::TableCells,
                requested,
                limit: max_table_cells,
            });
        }

        // Every fitting weight is <= capacity, which now fits in usize.
        Ok(Self {
            weights: weights
                .into_iter()
                .map(|w| w.map(|w| w as usize))
                .collect(),
            capacity: capacity as usize,
        })
    }

    /// Number of table cells this problem allocates.
    pub fn table_cells(&self) -> usize {
        (self.weights.len() + 1) * (self.capacity + 1)
    }
}

/// A filled dynamic programming table.
#[derive(Debug, Clone)]
pub struct DpTable {
    cells: Vec<f64>,
    width: usize,
    rows: usize,
}

impl DpTable {
    /// Fills the table for `problem` with the values of `catalog`.
    ///
    /// Rows at least `parallel_row_threshold` cells wide are filled on the
    /// rayon pool; the result is identical to a sequential fill.
    pub fn fill(
        catalog: &Catalog,
        problem: &IntegerProblem,
        parallel_row_threshold: Option<usize>,
        stats: &mut SolveStats,
    ) -> Self {
        let width = problem.capacity + 1;
        let rows = problem.weights.len() + 1;
        let mut cells = vec![0.0; width * rows];
        let parallel = parallel_row_threshold.is_some_and(|t| width >= t);

        for (i, (weight, value)) in problem.weights.iter().zip(catalog.values()).enumerate() {
            let (head, tail) = cells.split_at_mut((i + 1) * width);
            let prev = &head[i * width..];
            let next = &mut tail[..width];

            match *weight {
                None => next.copy_from_slice(prev),
                Some(weight) if parallel => {
                    next.par_iter_mut()
                        .enumerate()
                        .for_each(|(w, cell)| *cell = transition(prev, w, weight, value));
                    stats.parallel_rows += 1;
                }
                Some(weight) => {
                    for (w, cell) in next.iter_mut().enumerate() {
                        *cell = transition(prev, w, weight, value);
                    }
                }
            }
        }

        stats.table_cells = cells.len() as u64;
        Self { cells, width, rows }
    }

    /// `best[i][w]`.
    #[inline]
    pub fn best(&self, i: usize, w: usize) -> f64 {
        self.cells[i * self.width + w]
    }

    /// The optimal value, `best[n][W]`.
    pub fn optimal_value(&self) -> f64 {
        self.best(self.rows - 1, self.width - 1)
    }

    /// Walks the table backward from `(n, W)`, selecting item `i` only when
    /// `best[i + 1][w]` differs from `best[i][w]`.
    ///
    /// Returns the selected indices in catalog order.
    pub fn reconstruct(&self, problem: &IntegerProblem) -> Vec<usize> {
        let mut selected = Vec::new();
        let mut w = self.width - 1;
        for i in (0..self.rows - 1).rev() {
            if self.best(i + 1, w) == self.best(i, w) {
                continue;
            }
            if let Some(weight) = problem.weights[i] {
                selected.push(i);
                w -= weight;
            }
        }
        selected.reverse();
        selected
    }
}

#[inline]
fn transition(prev: &[f64], w: usize, weight: usize, value: f64) -> f64 {
    if weight > w {
        return prev[w];
    }
    let take = prev[w - weight] + value;
    if take > prev[w] {
        take
    } else {
        prev[w]
    }
}

/// Solves `catalog` under `capacity` with integer dynamic programming.
///
/// `capacity` must already be a non-negative finite number.
pub fn solve(
    catalog: &Catalog,
    capacity: f64,
    config: &SolverConfig,
    stats: &mut SolveStats,
) -> Result<Solution> {
    let problem = IntegerProblem::new(catalog, capacity, config.max_table_cells)?;
    debug!(
        event = "dp_table",
        rows = problem.weights.len() + 1,
        width = problem.capacity + 1,
        cells = problem.table_cells(),
    );

    let table = DpTable::fill(catalog, &problem, config.parallel_row_threshold, stats);
    let selected = table.reconstruct(&problem);
    trace!(
        event = "dp_reconstructed",
        optimal_value = table.optimal_value(),
        selected_count = selected.len(),
    );

    Ok(Solution::from_selection(catalog, selected))
}
