//! Error types for KnapForge

use std::fmt;

use thiserror::Error;

/// Main error type for KnapForge operations.
///
/// Every variant is a local validation failure: retrying with identical
/// input fails identically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnapsackError {
    /// An item has a negative, non-finite or unrepresentable weight or value.
    #[error("Invalid item at index {index}: {field} must be a non-negative finite number, got {value}")]
    InvalidItem {
        index: usize,
        field: ItemField,
        value: f64,
    },

    /// The capacity is negative or not finite.
    #[error("Invalid capacity: must be a non-negative finite number, got {capacity}")]
    InvalidCapacity { capacity: f64 },

    /// A fractional weight or capacity reached an integer-only algorithm.
    #[error("Unsupported weight domain: {subject} is {value}, but the selected algorithm requires integer weights")]
    UnsupportedWeightDomain { subject: WeightSubject, value: f64 },

    /// The solve would exceed a configured resource ceiling.
    #[error("Resource exhausted: {resource} would reach {requested}, limit is {limit}")]
    ResourceExhausted {
        resource: Resource,
        requested: u64,
        limit: u64,
    },
}

/// Result type alias for KnapForge operations
pub type Result<T> = std::result::Result<T, KnapsackError>;

/// The item field an [`KnapsackError::InvalidItem`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Weight,
    Value,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemField::Weight => write!(f, "weight"),
            ItemField::Value => write!(f, "value"),
        }
    }
}

/// What carried a weight outside the supported domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightSubject {
    /// The weight of the catalog item at this index.
    Item(usize),
    /// The capacity passed to the solve call.
    Capacity,
}

impl fmt::Display for WeightSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightSubject::Item(index) => write!(f, "weight of item {}", index),
            WeightSubject::Capacity => write!(f, "capacity"),
        }
    }
}

/// A bounded resource guarded by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Cells of the dynamic programming table.
    TableCells,
    /// Nodes explored by branch-and-bound.
    SearchNodes,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::TableCells => write!(f, "DP table cells"),
            Resource::SearchNodes => write!(f, "search nodes"),
        }
    }
}
