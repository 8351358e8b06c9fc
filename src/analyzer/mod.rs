//! Analyzer module for Vaastavik.
//!
//! This module provides the placeholder credibility engine and the
//! types it produces. No natural-language processing takes place: the
//! score and verdict are pseudo-random and the issue list is fixed.
//!
//! # Example
//!
//! ```
//! use vaastavik::analyzer::{Analyzer, Verdict};
//!
//! let mut analyzer = Analyzer::seeded(42);
//! assert!(analyzer.analyze("   ").is_none());
//!
//! let result = analyzer.analyze("Breaking: scientists confirm...").unwrap();
//! assert!(result.credibility >= 0.0 && result.credibility < 100.0);
//! assert!(matches!(result.verdict, Verdict::Reliable | Verdict::Suspicious));
//! assert_eq!(result.flags.len(), 3);
//! ```

pub mod engine;
pub mod input;
pub mod types;

pub use engine::{is_analyzable, Analyzer};
pub use input::{is_stdin, read_file, read_input, InputError, InputResult};
pub use types::{AnalysisResult, ScoreBand, Verdict, DETECTED_ISSUES};
