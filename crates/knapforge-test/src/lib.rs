//! Shared test fixtures for KnapForge crates.
//!
//! This crate provides data and pure functions for testing.
//! It does NOT depend on `knapforge-solver` so the solver can use it as a
//! dev-dependency.
//!
//! - [`reference`] - The classic four-item instance
//! - [`random`] - Seeded catalog generators
//! - [`brute_force`] - Exhaustive `2^n` oracle and feasibility checks
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! knapforge-test = { workspace = true }
//! ```

pub mod brute_force;
pub mod random;
pub mod reference;

pub use brute_force::{assert_feasible, brute_force_best_value};
pub use random::{random_decimal_catalog, random_dyadic_catalog, random_integer_catalog};
pub use reference::{reference_catalog, REFERENCE_CAPACITY};
