//! Report generation with multiple output formats
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate domain results to external formats
//! - AreaSummary and SubstitutionReport are rendered as text or JSON
//! - Each format keeps its own rules; domain values stay untouched

use crate::calculator::AreaSummary;
use crate::domain::error::{ShapeError, ShapeResult};
use crate::domain::substitution::SubstitutionReport;
use std::io::Write;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text, optionally colored
    Human,
    /// Pretty-printed JSON for programmatic consumption
    Json,
}

/// Options for customizing report output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use colored output (for human format)
    pub use_colors: bool,
    /// Decimal places for areas in human format
    pub precision: usize,
    /// Whether to list each shape before the total
    pub show_breakdown: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            use_colors: true,
            precision: 2,
            show_breakdown: true,
        }
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Heading,
    Good,
    Bad,
    Dim,
}

/// Renders calculation results
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    /// Create a new report formatter with options
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Format an area summary in the specified format
    pub fn format_summary(&self, summary: &AreaSummary, format: OutputFormat) -> ShapeResult<String> {
        match format {
            OutputFormat::Human => Ok(self.summary_human(summary)),
            OutputFormat::Json => to_json(summary),
        }
    }

    /// Format substitutability results in the specified format
    pub fn format_substitution(
        &self,
        reports: &[SubstitutionReport],
        format: OutputFormat,
    ) -> ShapeResult<String> {
        match format {
            OutputFormat::Human => Ok(self.substitution_human(reports)),
            OutputFormat::Json => to_json(&reports),
        }
    }

    /// Write a formatted summary to a writer
    pub fn write_summary<W: Write>(
        &self,
        summary: &AreaSummary,
        format: OutputFormat,
        mut writer: W,
    ) -> ShapeResult<()> {
        let formatted = self.format_summary(summary, format)?;
        writer.write_all(formatted.as_bytes())?;
        Ok(())
    }

    fn summary_human(&self, summary: &AreaSummary) -> String {
        let precision = self.options.precision;
        let mut output = String::new();

        if summary.is_empty() {
            output.push_str(&self.paint("No shapes to measure", Tone::Dim));
            output.push('\n');
        } else if self.options.show_breakdown {
            output.push_str(&self.paint("Area breakdown", Tone::Heading));
            output.push('\n');

            let width = summary
                .entries
                .iter()
                .map(|entry| entry.name.len())
                .max()
                .unwrap_or(0);

            for entry in &summary.entries {
                output.push_str(&format!(
                    "  {} {:<width$}  {:>.precision$}\n",
                    self.paint(&format!("#{}", entry.index), Tone::Dim),
                    entry.name,
                    entry.area,
                ));
            }
            output.push('\n');
        }

        let plural = if summary.shape_count == 1 { "" } else { "s" };
        output.push_str(&format!(
            "{} {:.precision$} ({} shape{})\n",
            self.paint("Total area:", Tone::Heading),
            summary.total_area,
            summary.shape_count,
            plural,
        ));

        output
    }

    fn substitution_human(&self, reports: &[SubstitutionReport]) -> String {
        let mut output = String::new();

        for report in reports {
            let verdict = if report.is_substitutable() {
                self.paint("substitutable", Tone::Good)
            } else {
                self.paint("NOT substitutable", Tone::Bad)
            };
            output.push_str(&format!("{}: {}\n", report.shape, verdict));

            if !report.width_update_isolated {
                output.push_str("  set_width also changed the height\n");
            }
            if !report.height_update_isolated {
                output.push_str("  set_height also changed the width\n");
            }
        }

        output
    }

    #[cfg(feature = "colors")]
    fn paint(&self, text: &str, tone: Tone) -> String {
        use colored::Colorize;

        if !self.options.use_colors {
            return text.to_string();
        }

        match tone {
            Tone::Heading => text.bold().to_string(),
            Tone::Good => text.green().to_string(),
            Tone::Bad => text.red().bold().to_string(),
            Tone::Dim => text.dimmed().to_string(),
        }
    }

    #[cfg(not(feature = "colors"))]
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> ShapeResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ShapeError::config(format!("Failed to serialize report: {e}")))
}
