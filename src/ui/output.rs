//! Output formatting and display logic for imgsweep

use serde::Serialize;
use std::fmt;

use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::core::types::SourceScan;
use crate::reconcile::SweepOutcome;

/// Counts section of the JSON report
#[derive(Debug, Serialize)]
struct JsonCounts {
    total: usize,
    used: usize,
    unused: usize,
}

/// Source section of the JSON report
#[derive(Debug, Serialize)]
struct JsonSources<'a> {
    scanned: Vec<&'a str>,
    skipped: Vec<&'a SourceScan>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    images_dir: &'a str,
    counts: JsonCounts,
    unused: Vec<&'a str>,
    used: Vec<&'a str>,
    sources: JsonSources<'a>,
}

/// Render a sweep outcome in the requested format
pub fn render(outcome: &SweepOutcome, output_format: &str) -> Result<String> {
    match output_format {
        output_formats::JSON => render_json(outcome),
        output_formats::MINIMAL => Ok(render_minimal(outcome)),
        _ => Ok(render_text(outcome)),
    }
}

/// Print a sweep outcome to stdout in the requested format
pub fn display_results(outcome: &SweepOutcome, output_format: &str) -> Result<()> {
    let rendered = render(outcome, output_format)?;
    print!("{rendered}");
    Ok(())
}

/// Full human-readable report: counts, unused images, then used references
pub fn render_text(outcome: &SweepOutcome) -> String {
    TextReport(outcome).to_string()
}

struct TextReport<'a>(&'a SweepOutcome);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        let report = &outcome.report;
        let banner = "=".repeat(display::RULE_WIDTH);
        let rule = "-".repeat(display::RULE_WIDTH);
        let indent = display::ITEM_INDENT;

        writeln!(f, "{banner}")?;
        writeln!(f, "Total images in directory: {}", report.total_count())?;
        writeln!(f, "Used images: {}", report.used_count())?;
        writeln!(f, "Unused images: {}", report.unused_count())?;
        writeln!(f, "{banner}")?;

        if report.all_used() {
            writeln!(f, "\nAll images are used!")?;
        } else {
            writeln!(f, "\nUNUSED IMAGES (safe to delete):")?;
            writeln!(f, "{rule}")?;
            for image in &report.unused {
                writeln!(f, "{indent}{}/{image}", outcome.images_dir)?;
            }
        }

        writeln!(f, "\n{banner}")?;
        writeln!(f, "Used images (for review):")?;
        writeln!(f, "{rule}")?;
        for reference in &report.used {
            writeln!(f, "{indent}{reference}")?;
        }

        Ok(())
    }
}

/// Unused image paths only, one per line
pub fn render_minimal(outcome: &SweepOutcome) -> String {
    outcome
        .report
        .unused
        .iter()
        .map(|image| format!("{}/{image}\n", outcome.images_dir))
        .collect()
}

/// Structured report for automation
pub fn render_json(outcome: &SweepOutcome) -> Result<String> {
    let report = &outcome.report;
    let json = JsonReport {
        images_dir: &outcome.images_dir,
        counts: JsonCounts {
            total: report.total_count(),
            used: report.used_count(),
            unused: report.unused_count(),
        },
        unused: report.unused.iter().map(String::as_str).collect(),
        used: report.used.iter().map(String::as_str).collect(),
        sources: JsonSources {
            scanned: outcome.scanned().map(|scan| scan.path.as_str()).collect(),
            skipped: outcome.skipped().collect(),
        },
    };

    let mut rendered = serde_json::to_string_pretty(&json)?;
    rendered.push('\n');
    Ok(rendered)
}
