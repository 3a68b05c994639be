//! Solver entry points.

use num_traits::ToPrimitive;
use tracing::info;

use knapforge_config::{AlgorithmType, SolverConfig};
use knapforge_core::{Catalog, KnapsackError, Result, Solution};

use crate::branch_and_bound::BranchAndBound;
use crate::dp;
use crate::stats::SolveStats;

/// Result of a solve call together with its statistics.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The optimal selection.
    pub solution: Solution,
    /// Work done to find it.
    pub stats: SolveStats,
}

/// Exact 0/1 knapsack solver.
///
/// Holds only its configuration; every call is a pure function of the
/// catalog and capacity, so one solver may be shared across threads.
///
/// # Example
///
/// ```
/// use knapforge_solver::{Catalog, KnapsackSolver, SolverConfig};
///
/// let catalog = Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]).unwrap();
/// let solver = KnapsackSolver::new(SolverConfig::default());
/// let solution = solver.solve(&catalog, 10).unwrap();
///
/// assert_eq!(solution.selected_items(), &[1, 3]);
/// assert_eq!(solution.total_value(), 90.0);
/// assert_eq!(solution.total_weight(), 7.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnapsackSolver {
    config: SolverConfig,
}

impl KnapsackSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `catalog` under `capacity`.
    ///
    /// # Errors
    ///
    /// - [`KnapsackError::InvalidCapacity`] for a negative or non-finite capacity.
    /// - [`KnapsackError::UnsupportedWeightDomain`] for fractional weights or
    ///   capacity under dynamic programming.
    /// - [`KnapsackError::ResourceExhausted`] when a configured ceiling would
    ///   be exceeded.
    pub fn solve<C: ToPrimitive>(&self, catalog: &Catalog, capacity: C) -> Result<Solution> {
        self.solve_with_stats(catalog, capacity)
            .map(|result| result.solution)
    }

    /// Solves `catalog` under `capacity`, returning statistics as well.
    pub fn solve_with_stats<C: ToPrimitive>(
        &self,
        catalog: &Catalog,
        capacity: C,
    ) -> Result<SolveResult> {
        let capacity = validate_capacity(capacity.to_f64())?;
        let algorithm = self.config.algorithm;

        info!(
            event = "solve_start",
            item_count = catalog.len() as u64,
            capacity,
            algorithm = %algorithm,
        );

        let mut stats = SolveStats::new(algorithm);
        stats.start();

        let solution = if catalog.is_empty() {
            Solution::empty()
        } else {
            match algorithm {
                AlgorithmType::DynamicProgramming => {
                    dp::solve(catalog, capacity, &self.config, &mut stats)?
                }
                AlgorithmType::BranchAndBound => {
                    BranchAndBound::new(catalog, capacity, &self.config.branch_and_bound)
                        .solve(&mut stats)?
                }
            }
        };
        stats.finish();

        info!(
            event = "solve_end",
            total_value = solution.total_value(),
            total_weight = solution.total_weight(),
            selected_count = solution.len() as u64,
            duration_ms = stats.elapsed().as_millis() as u64,
        );

        Ok(SolveResult { solution, stats })
    }
}

fn validate_capacity(capacity: Option<f64>) -> Result<f64> {
    match capacity {
        Some(c) if c.is_finite() && c >= 0.0 => Ok(c),
        other => Err(KnapsackError::InvalidCapacity {
            capacity: other.unwrap_or(f64::NAN),
        }),
    }
}

/// Solves `catalog` under `capacity` with the default configuration
/// (integer dynamic programming).
///
/// # Example
///
/// ```
/// use knapforge_solver::{solve, Catalog};
///
/// let catalog = Catalog::new([(3, 4), (3, 4)]).unwrap();
/// assert_eq!(solve(&catalog, 0).unwrap().total_value(), 0.0);
/// assert_eq!(solve(&catalog, 6).unwrap().total_value(), 8.0);
/// ```
pub fn solve<C: ToPrimitive>(catalog: &Catalog, capacity: C) -> Result<Solution> {
    KnapsackSolver::default().solve(catalog, capacity)
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
