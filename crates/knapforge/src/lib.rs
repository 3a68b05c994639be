//! KnapForge - An exact 0/1 knapsack solver in Rust
//!
//! Zero-wiring API: build a [`Catalog`] and call [`solve`].
//!
//! # Example
//!
//! ```rust
//! use knapforge::prelude::*;
//!
//! let catalog = Catalog::new([(5, 10), (4, 40), (6, 30), (3, 50)]).unwrap();
//! let solution = knapforge::solve(&catalog, 10).unwrap();
//!
//! assert_eq!(solution.selected_items(), &[1, 3]);
//! assert_eq!(solution.total_value(), 90.0);
//! assert_eq!(solution.total_weight(), 7.0);
//! ```

// Data model and errors
pub use knapforge_core::{
    Catalog, Item, ItemField, KnapsackError, Resource, Result, Solution, WeightSubject,
};

// Configuration
pub use knapforge_config::{
    AlgorithmType, BranchAndBoundConfig, ConfigError, ExplorationType, SolverConfig,
};

// Engine
pub use knapforge_solver::{KnapsackSolver, SolveResult, SolveStats};

#[cfg(feature = "console")]
pub use knapforge_console as console;

mod solver;
pub use solver::{solve, solve_with_stats, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        AlgorithmType, Catalog, Item, KnapsackError, KnapsackSolver, Solution, SolverConfig,
    };
}
