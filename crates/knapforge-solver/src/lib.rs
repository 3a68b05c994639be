//! KnapForge Solver Engine
//!
//! This crate provides the exact 0/1 knapsack engine:
//! - [`KnapsackSolver`] and the zero-configuration [`solve`] entry point
//! - Integer dynamic programming (default, pseudo-polynomial)
//! - Branch-and-bound with LP-relaxation bounds (real-valued weights)
//! - Per-call statistics ([`SolveStats`])
//!
//! Logging levels:
//! - **INFO**: Solve start/end
//! - **DEBUG**: Table sizing, search summaries
//! - **TRACE**: Incumbent improvements

pub mod branch_and_bound;
pub mod dp;
pub mod solver;
pub mod stats;

pub use knapforge_config::{AlgorithmType, ExplorationType, SolverConfig};
pub use knapforge_core::{Catalog, Item, KnapsackError, Result, Solution};
pub use solver::{solve, KnapsackSolver, SolveResult};
pub use stats::SolveStats;
