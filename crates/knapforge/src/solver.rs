//! Solver entry point that hides all internal wiring.

use std::path::Path;

use knapforge_config::SolverConfig;
use knapforge_core::{Catalog, Result, Solution};
use knapforge_solver::{KnapsackSolver, SolveResult};
use num_traits::ToPrimitive;

/// Configuration file read from the working directory.
pub const CONFIG_FILE: &str = "knapsack.toml";

/// Solves `catalog` under `capacity`.
///
/// Reads [`CONFIG_FILE`] when present and falls back to defaults (integer
/// dynamic programming) when it is missing or invalid. With the `console`
/// feature, the first call also installs the console output.
pub fn solve<C: ToPrimitive>(catalog: &Catalog, capacity: C) -> Result<Solution> {
    solve_with_stats(catalog, capacity).map(|result| result.solution)
}

/// Like [`solve`], also returning the statistics of the call.
pub fn solve_with_stats<C: ToPrimitive>(catalog: &Catalog, capacity: C) -> Result<SolveResult> {
    #[cfg(feature = "console")]
    knapforge_console::init();

    solver_from_file(CONFIG_FILE).solve_with_stats(catalog, capacity)
}

fn solver_from_file(path: impl AsRef<Path>) -> KnapsackSolver {
    KnapsackSolver::new(SolverConfig::load(path).unwrap_or_default())
}
