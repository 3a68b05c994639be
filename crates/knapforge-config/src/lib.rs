//! Configuration system for KnapForge.
//!
//! Load solver configuration from TOML or YAML files to choose the exact
//! algorithm and its resource ceilings without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use knapforge_config::{AlgorithmType, ExplorationType, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     algorithm = "branch_and_bound"
//!
//!     [branch_and_bound]
//!     exploration_type = "best_bound_first"
//!     node_limit = 500000
//! "#).unwrap();
//!
//! assert_eq!(config.algorithm, AlgorithmType::BranchAndBound);
//! assert_eq!(config.branch_and_bound.exploration_type, ExplorationType::BestBoundFirst);
//! assert_eq!(config.branch_and_bound.node_limit, Some(500_000));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use knapforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("knapsack.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default ceiling on dynamic programming table cells (200 MB of `f64`).
pub const DEFAULT_MAX_TABLE_CELLS: u64 = 25_000_000;

/// Default row width above which table rows are filled in parallel.
pub const DEFAULT_PARALLEL_ROW_THRESHOLD: usize = 65_536;

/// Default ceiling on branch-and-bound nodes.
pub const DEFAULT_NODE_LIMIT: u64 = 10_000_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Exact algorithm variant.
    #[serde(default)]
    pub algorithm: AlgorithmType,

    /// Maximum number of DP table cells, `(n + 1) * (capacity + 1)`.
    #[serde(default = "default_max_table_cells")]
    pub max_table_cells: u64,

    /// Row width from which DP rows are filled in parallel (None = never).
    #[serde(default = "default_parallel_row_threshold")]
    pub parallel_row_threshold: Option<usize>,

    /// Branch-and-bound settings.
    #[serde(default)]
    pub branch_and_bound: BranchAndBoundConfig,
}

fn default_max_table_cells() -> u64 {
    DEFAULT_MAX_TABLE_CELLS
}

fn default_parallel_row_threshold() -> Option<usize> {
    Some(DEFAULT_PARALLEL_ROW_THRESHOLD)
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmType::default(),
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            parallel_row_threshold: default_parallel_row_threshold(),
            branch_and_bound: BranchAndBoundConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks that every limit is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_table_cells == 0 {
            return Err(ConfigError::Invalid(
                "max_table_cells must be greater than zero".to_string(),
            ));
        }
        if self.parallel_row_threshold == Some(0) {
            return Err(ConfigError::Invalid(
                "parallel_row_threshold must be greater than zero".to_string(),
            ));
        }
        if self.branch_and_bound.node_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "branch_and_bound.node_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the algorithm variant.
    pub fn with_algorithm(mut self, algorithm: AlgorithmType) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the DP table cell ceiling.
    pub fn with_max_table_cells(mut self, cells: u64) -> Self {
        self.max_table_cells = cells;
        self
    }

    /// Sets the parallel row threshold.
    pub fn with_parallel_row_threshold(mut self, threshold: Option<usize>) -> Self {
        self.parallel_row_threshold = threshold;
        self
    }

    /// Sets the branch-and-bound exploration order.
    pub fn with_exploration_type(mut self, exploration_type: ExplorationType) -> Self {
        self.branch_and_bound.exploration_type = exploration_type;
        self
    }

    /// Sets the branch-and-bound node ceiling.
    pub fn with_node_limit(mut self, node_limit: Option<u64>) -> Self {
        self.branch_and_bound.node_limit = node_limit;
        self
    }
}

/// Exact algorithm variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmType {
    /// Pseudo-polynomial table over integer weights.
    #[default]
    DynamicProgramming,

    /// Tree search pruned with LP-relaxation bounds; supports real weights.
    BranchAndBound,
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmType::DynamicProgramming => write!(f, "DynamicProgramming"),
            AlgorithmType::BranchAndBound => write!(f, "BranchAndBound"),
        }
    }
}

/// Branch-and-bound configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BranchAndBoundConfig {
    /// Order in which open nodes are explored.
    #[serde(default)]
    pub exploration_type: ExplorationType,

    /// Maximum number of nodes to explore (None = unlimited).
    #[serde(default = "default_node_limit")]
    pub node_limit: Option<u64>,
}

fn default_node_limit() -> Option<u64> {
    Some(DEFAULT_NODE_LIMIT)
}

impl Default for BranchAndBoundConfig {
    fn default() -> Self {
        Self {
            exploration_type: ExplorationType::default(),
            node_limit: default_node_limit(),
        }
    }
}

/// Exploration order of the branch-and-bound frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationType {
    /// Deepest node first; memory efficient.
    #[default]
    DepthFirst,

    /// Highest optimistic bound first.
    BestBoundFirst,
}

impl fmt::Display for ExplorationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorationType::DepthFirst => write!(f, "DepthFirst"),
            ExplorationType::BestBoundFirst => write!(f, "BestBoundFirst"),
        }
    }
}
