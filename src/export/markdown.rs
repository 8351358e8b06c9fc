//! Markdown export implementation.
//!
//! Exports analysis results in Markdown format for documentation and reporting.

use super::{Exporter, Report};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        let result = &report.result;

        writeln!(writer, "# Analysis Results")?;
        writeln!(writer)?;
        writeln!(writer, "**Verdict:** {}", result.verdict.headline())?;
        writeln!(writer)?;

        writeln!(writer, "| Metric | Value |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Credibility Score | {} |", result.score_label())?;
        writeln!(writer, "| Band | {} |", result.band())?;
        writeln!(writer, "| Verdict | {} |", result.verdict)?;
        writeln!(writer, "| Characters Analyzed | {} |", report.input_chars)?;
        writeln!(writer)?;

        writeln!(writer, "## Detected Issues")?;
        writeln!(writer)?;
        for flag in &result.flags {
            writeln!(writer, "- {}", flag)?;
        }

        Ok(())
    }
}
