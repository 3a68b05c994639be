//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end
//! - **DEBUG**: DP table sizing and search summaries
//! - **TRACE**: Incumbent improvements
//!
//! The filter defaults to `info` and honors `RUST_LOG`.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the KnapForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 _  __                 _____
| |/ /_ __   __ _ _ __|  ___|__  _ __ __ _  ___
| ' /| '_ \ / _` | '_ \ |_ / _ \| '__/ _` |/ _ \
| . \| | | | (_| | |_) |  _| (_) | | | (_| |  __/
|_|\_\_| |_|\__,_| .__/|_|  \___/|_|  \__, |\___|
                 |_|                  |___/
"#;

    let version_line = format!("              v{} - Exact 0/1 Knapsack Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from solver modules
        if !target.starts_with("knapforge_solver") && !target.starts_with("knapforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    item_count: Option<u64>,
    capacity: Option<f64>,
    total_value: Option<f64>,
    total_weight: Option<f64>,
    selected_count: Option<u64>,
    duration_ms: Option<u64>,
    rows: Option<u64>,
    width: Option<u64>,
    cells: Option<u64>,
    candidates: Option<u64>,
    nodes_explored: Option<u64>,
    nodes_pruned: Option<u64>,
    prune_rate: Option<f64>,
    value: Option<f64>,
    best_value: Option<f64>,
    depth: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "algorithm" => self.algorithm = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "selected_count" => self.selected_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "rows" => self.rows = Some(value),
            "width" => self.width = Some(value),
            "cells" => self.cells = Some(value),
            "candidates" => self.candidates = Some(value),
            "nodes_explored" => self.nodes_explored = Some(value),
            "nodes_pruned" => self.nodes_pruned = Some(value),
            "depth" => self.depth = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "capacity" => self.capacity = Some(value),
            "total_value" => self.total_value = Some(value),
            "total_weight" => self.total_weight = Some(value),
            "value" => self.value = Some(value),
            "best_value" => self.best_value = Some(value),
            "prune_rate" => self.prune_rate = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "dp_table" => format_dp_table(v),
        "search_end" => format_search_end(v),
        "incumbent" if level == Level::TRACE => format_incumbent(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    let items = v.item_count.unwrap_or(0);
    let algorithm = v.algorithm.as_deref().unwrap_or("Unknown");

    format!(
        "{} Solving │ {} items │ capacity {} │ {}",
        "▶".bright_green().bold(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
        format_quantity(v.capacity.unwrap_or(0.0)).bright_yellow(),
        algorithm.white().bold()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let value = format_quantity(v.total_value.unwrap_or(0.0));
    let weight = format_quantity(v.total_weight.unwrap_or(0.0));
    let selected = v.selected_count.unwrap_or(0);

    let mut output = format!(
        "{} Solving complete │ {} │ value {} │ weight {} │ {} selected",
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        value.bright_green().bold(),
        weight.white(),
        selected.to_formatted_string(&Locale::en).white()
    );

    // Summary box
    let border = "═".repeat(58);
    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", border).bright_cyan().to_string());
    output.push('\n');
    for (label, text) in [("Total Value:", value), ("Total Weight:", weight)] {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            text,
            "║".bright_cyan()
        ));
        output.push('\n');
    }
    output.push_str(&format!("╚{}╝", border).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_dp_table(v: &EventVisitor) -> String {
    format!(
        "  {} DP table │ {} rows × {} columns │ {} cells",
        "▦".bright_blue(),
        v.rows.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.width.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.cells
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    format!(
        "  {} Search │ {} candidates │ {} nodes │ {} pruned ({:.1}%) │ best {}",
        "◀".bright_blue(),
        v.candidates.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.nodes_explored
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        v.nodes_pruned
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        v.prune_rate.unwrap_or(0.0) * 100.0,
        format_quantity(v.best_value.unwrap_or(0.0)).bright_green()
    )
}

fn format_incumbent(v: &EventVisitor) -> String {
    format!(
        "  {} Incumbent {} at depth {}",
        "✓".bright_green(),
        format_quantity(v.value.unwrap_or(0.0)).bright_green(),
        v.depth.unwrap_or(0).to_string().bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Integers print without a fractional part, with thousands separators.
fn format_quantity(q: f64) -> String {
    if q.fract() == 0.0 && q.abs() < u64::MAX as f64 {
        (q as u64).to_formatted_string(&Locale::en)
    } else {
        format!("{}", q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(90.0), "90");
        assert_eq!(format_quantity(1_234_567.0), "1,234,567");
        assert_eq!(format_quantity(2.5), "2.5");
    }

    #[test]
    fn test_unknown_event_formats_empty() {
        let visitor = EventVisitor {
            event: Some("step".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_incumbent_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("incumbent".to_string()),
            value: Some(40.0),
            depth: Some(2),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(format_event(&visitor, Level::TRACE).contains("40"));
    }

    #[test]
    fn test_solve_end_contains_totals() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            total_value: Some(90.0),
            total_weight: Some(7.0),
            selected_count: Some(2),
            duration_ms: Some(3),
            ..Default::default()
        };
        let output = format_event(&visitor, Level::INFO);
        assert!(output.contains("Total Value:"));
        assert!(output.contains("90"));
        assert!(output.contains("3ms"));
    }

    #[test]
    fn test_search_end_shows_prune_rate() {
        let visitor = EventVisitor {
            event: Some("search_end".to_string()),
            candidates: Some(4),
            nodes_explored: Some(9),
            nodes_pruned: Some(3),
            prune_rate: Some(0.25),
            best_value: Some(90.0),
            ..Default::default()
        };
        let output = format_event(&visitor, Level::DEBUG);
        assert!(output.contains("25.0%"));
        assert!(output.contains("90"));
    }
}
