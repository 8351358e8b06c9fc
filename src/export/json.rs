//! JSON export implementation.
//!
//! Exports analysis results in JSON format for machine-readable output.

use super::{Exporter, Report};
use crate::analyzer::Verdict;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    verdict: Verdict,
    headline: &'static str,
    credibility: f64,
    band: &'static str,
    flags: &'a [String],
    input_chars: usize,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        let result = &report.result;
        let export = JsonExport {
            verdict: result.verdict,
            headline: result.verdict.headline(),
            credibility: result.credibility,
            band: result.band().label(),
            flags: &result.flags,
            input_chars: report.input_chars,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
