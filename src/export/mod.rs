//! Export functionality for analysis results.
//!
//! This module provides exporters for printing an analysis result in
//! various formats: plain text, JSON, and Markdown.

pub mod json;
pub mod markdown;
pub mod text;

use crate::analyzer::AnalysisResult;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text - human-readable terminal output
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone)]
pub struct Report {
    /// The analysis result
    pub result: AnalysisResult,
    /// Number of characters in the analyzed text
    pub input_chars: usize,
}

impl Report {
    /// Create a report for a result and the text it was produced from.
    pub fn new(result: AnalysisResult, text: &str) -> Self {
        Self {
            result,
            input_chars: text.chars().count(),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()>;
}

/// Export a report in the specified format.
pub fn export<W: Write>(format: ExportFormat, report: &Report, writer: &mut W) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(report, writer),
        ExportFormat::Json => json::JsonExporter.export(report, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(report, writer),
    }
}

/// Export a report to a string.
pub fn export_to_string(format: ExportFormat, report: &Report) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
