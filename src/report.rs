use crate::edge::Format;
use crate::error::Result;
use crate::path::ConversionPath;
use crate::solver::{SearchStats, SolveOutcome};
use crate::strategy::SearchStrategy;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Width of the value column in the summary box.
const SUMMARY_VALUE_WIDTH: usize = 32;

/// A printable record of one solve request and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport<F> {
    /// Requested format
    pub target: F,

    /// Formats the caller started from
    pub available: Vec<F>,

    /// Strategy used
    pub strategy: SearchStrategy,

    /// The solved path (an edge array in JSON), `null` if unreachable
    pub path: Option<ConversionPath<F>>,

    /// Number of conversions in the path (0 if unreachable)
    pub hops: usize,

    /// Search statistics
    pub stats: SearchStats,

    /// When the report was produced
    pub generated_at: DateTime<Local>,
}

impl<F: Format + Serialize> SolveReport<F> {
    /// Builds a report from a solver outcome.
    #[must_use]
    pub fn new(target: F, available: Vec<F>, outcome: SolveOutcome<F>) -> Self {
        let hops = outcome.path.as_ref().map_or(0, |path| path.len());

        Self {
            target,
            available,
            strategy: outcome.stats.strategy,
            path: outcome.path,
            hops,
            stats: outcome.stats,
            generated_at: Local::now(),
        }
    }

    /// Returns true if a path was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Renders the path as a single line, e.g. `png -> webp -> jpg`.
    #[must_use]
    pub fn render_text(&self) -> String {
        self.path.as_ref().map_or_else(
            || format!("no conversion path to '{}'", self.target),
            ToString::to_string,
        )
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        let available = self
            .available
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        println!("\n╔═══════════════════════════════════════════════════════╗");
        println!("║              Conversion Path Summary                  ║");
        println!("╠═══════════════════════════════════════════════════════╣");
        println!("║ Target:               {}║", fit(&self.target.to_string()));
        println!("║ Available:            {}║", fit(&available));
        println!("║ Strategy:             {}║", fit(self.strategy.id()));
        println!("║ Conversions:          {:>8}                        ║", self.hops);
        println!("║                                                       ║");
        println!(
            "║ States Expanded:      {:>8}                        ║",
            self.stats.expanded
        );
        println!(
            "║ Edges Inspected:      {:>8}                        ║",
            self.stats.inspected
        );
        println!(
            "║ Total Edges:          {:>8}                        ║",
            self.stats.total_edges
        );
        println!(
            "║ Search Time:          {:>8.3}ms                    ║",
            self.stats.duration.as_secs_f64() * 1_000.0
        );
        println!("╚═══════════════════════════════════════════════════════╝\n");
    }
}

/// Pads or truncates `value` to exactly the summary value column width.
fn fit(value: &str) -> String {
    if value.chars().count() <= SUMMARY_VALUE_WIDTH {
        return format!("{value:<width$}", width = SUMMARY_VALUE_WIDTH);
    }

    let mut cut: String = value.chars().take(SUMMARY_VALUE_WIDTH - 1).collect();
    cut.push('…');
    cut
}
