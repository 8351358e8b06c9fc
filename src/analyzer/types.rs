//! Shared types for credibility analysis.
//!
//! This module defines the verdict, score banding and result structures
//! produced by the analyzer and consumed by the UI and exporters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue descriptions attached to every analysis, in display order.
pub const DETECTED_ISSUES: [&str; 3] = [
    "Emotional language",
    "Unverified sources",
    "Clickbait title",
];

/// Categorical outcome of an analysis.
///
/// The placeholder engine only ever yields `Reliable` or `Suspicious`.
/// `Fake` and `CorrectNews` are part of the wire vocabulary and are
/// rendered with the warning indicator like any non-reliable verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "reliable")]
    Reliable,

    #[serde(rename = "suspicious")]
    Suspicious,

    #[serde(rename = "fake")]
    Fake,

    #[serde(rename = "Correct news")]
    CorrectNews,
}

impl Verdict {
    /// Returns true if this verdict gets the positive indicator.
    pub fn is_reliable(&self) -> bool {
        matches!(self, Verdict::Reliable)
    }

    /// Returns the headline shown next to the verdict icon.
    pub fn headline(&self) -> &'static str {
        if self.is_reliable() {
            "Content appears reliable"
        } else {
            "Suspicious content detected"
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Reliable => "reliable",
            Verdict::Suspicious => "suspicious",
            Verdict::Fake => "fake",
            Verdict::CorrectNews => "Correct news",
        };
        write!(f, "{}", s)
    }
}

/// Three-tier colour banding of a credibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// Score above 70 (green).
    High,

    /// Score above 40 up to and including 70 (yellow).
    Medium,

    /// Score of 40 or below (red).
    Low,
}

impl ScoreBand {
    /// Classifies a score. Both thresholds are exclusive lower bounds.
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            ScoreBand::High
        } else if score > 40.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    /// Returns a short label for the band.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The outcome of a single analyze action.
///
/// A new value replaces the previous one on every trigger; results are
/// never merged or accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Credibility score in `[0, 100)`.
    pub credibility: f64,

    /// Detected issue descriptions.
    pub flags: Vec<String>,

    /// Categorical verdict.
    pub verdict: Verdict,
}

impl AnalysisResult {
    /// Creates a result carrying the standard issue list.
    pub fn new(credibility: f64, verdict: Verdict) -> Self {
        Self {
            credibility,
            flags: DETECTED_ISSUES.iter().map(|s| s.to_string()).collect(),
            verdict,
        }
    }

    /// Colour band for the score bar.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.credibility)
    }

    /// Score formatted with one decimal place, e.g. `85.0%`.
    pub fn score_label(&self) -> String {
        format!("{:.1}%", self.credibility)
    }

    /// Fraction of the bar to fill.
    pub fn ratio(&self) -> f64 {
        (self.credibility / 100.0).clamp(0.0, 1.0)
    }
}
