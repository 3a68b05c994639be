//! KnapForge Core - Core types for 0/1 knapsack solving
//!
//! This crate provides the data model shared by every KnapForge crate:
//! - [`Item`] and [`Catalog`]: the validated, immutable problem input
//! - [`Solution`]: the outcome of one solve call
//! - [`KnapsackError`]: the error taxonomy for invalid input and resource limits

pub mod catalog;
pub mod error;
pub mod solution;


pub use catalog::{Catalog, Item};
pub use error::{ItemField, KnapsackError, Resource, Result, WeightSubject};
pub use solution::Solution;
