//! Solve statistics.
//!
//! Stack-allocated counters describing the work done by one solve call.

use std::time::{Duration, Instant};

use knapforge_config::AlgorithmType;

/// Statistics for a single solve call.
///
/// # Example
///
/// ```
/// use knapforge_solver::stats::SolveStats;
/// use knapforge_config::AlgorithmType;
///
/// let mut stats = SolveStats::new(AlgorithmType::BranchAndBound);
/// stats.start();
/// stats.record_node();
/// stats.record_node();
/// stats.record_prune();
/// stats.finish();
///
/// assert_eq!(stats.nodes_explored, 2);
/// assert_eq!(stats.nodes_pruned, 1);
/// ```
#[derive(Debug, Clone)]
pub struct SolveStats {
    start_time: Option<Instant>,
    duration: Option<Duration>,
    /// Algorithm that produced the solution.
    pub algorithm: AlgorithmType,
    /// Cells allocated for the DP table.
    pub table_cells: u64,
    /// DP rows filled on the rayon pool.
    pub parallel_rows: u64,
    /// Branch-and-bound nodes taken from the frontier.
    pub nodes_explored: u64,
    /// Branch-and-bound nodes discarded by their bound.
    pub nodes_pruned: u64,
    /// Times a strictly better selection was found.
    pub incumbent_updates: u64,
}

impl SolveStats {
    /// Creates empty statistics for `algorithm`.
    pub fn new(algorithm: AlgorithmType) -> Self {
        Self {
            start_time: None,
            duration: None,
            algorithm,
            table_cells: 0,
            parallel_rows: 0,
            nodes_explored: 0,
            nodes_pruned: 0,
            incumbent_updates: 0,
        }
    }

    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.duration = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.duration = Some(self.elapsed());
    }

    /// Returns the elapsed time, frozen once [`finish`](Self::finish) ran.
    pub fn elapsed(&self) -> Duration {
        if let Some(duration) = self.duration {
            return duration;
        }
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a node taken from the frontier.
    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
    }

    /// Records a pruned node.
    pub fn record_prune(&mut self) {
        self.nodes_pruned += 1;
    }

    /// Records an incumbent improvement.
    pub fn record_incumbent(&mut self) {
        self.incumbent_updates += 1;
    }

    /// Returns the share of explored-or-pruned nodes that were pruned.
    pub fn prune_rate(&self) -> f64 {
        let total = self.nodes_explored + self.nodes_pruned;
        if total == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / total as f64
        }
    }
}
