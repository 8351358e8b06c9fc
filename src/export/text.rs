//! Plain text export implementation.
//!
//! Mirrors the results panel of the TUI for terminal output.

use super::{Exporter, Report};
use std::io::{self, Write};

/// Width of the text score bar in characters.
const BAR_WIDTH: usize = 40;

/// Plain text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        let result = &report.result;
        let icon = if result.verdict.is_reliable() { "✔" } else { "⚠" };

        writeln!(writer, "Analysis Results")?;
        writeln!(writer)?;
        writeln!(writer, "{} {}", icon, result.verdict.headline())?;
        writeln!(writer)?;
        writeln!(writer, "Credibility Score: {}", result.score_label())?;
        writeln!(writer, "[{}] {}", score_bar(result.ratio()), result.band())?;
        writeln!(writer)?;
        writeln!(writer, "Detected Issues:")?;
        for flag in &result.flags {
            writeln!(writer, "  • {}", flag)?;
        }

        Ok(())
    }
}

/// Proportional bar, e.g. `[#####-----]`
fn score_bar(ratio: f64) -> String {
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
