//! Placeholder scoring engine.
//!
//! The engine does not look at the text beyond checking that it is not
//! blank. Score and verdict come from two independent uniform draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{AnalysisResult, Verdict};

/// Returns true if the text can be analyzed (non-empty after trimming).
pub fn is_analyzable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Produces mock analysis results.
#[derive(Debug, Clone)]
pub struct Analyzer {
    rng: StdRng,
}

impl Analyzer {
    /// Create an analyzer seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an analyzer with a fixed seed for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Analyze the given text.
    ///
    /// Returns `None` when the text is blank, which is the same condition
    /// that disables the analyze control in the UI.
    pub fn analyze(&mut self, text: &str) -> Option<AnalysisResult> {
        if !is_analyzable(text) {
            tracing::debug!("analyze skipped: blank input");
            return None;
        }

        let credibility = self.rng.gen::<f64>() * 100.0;
        let verdict = if self.rng.gen::<f64>() > 0.5 {
            Verdict::Reliable
        } else {
            Verdict::Suspicious
        };

        tracing::info!(
            chars = text.chars().count(),
            credibility,
            %verdict,
            "analysis complete"
        );

        Some(AnalysisResult::new(credibility, verdict))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
