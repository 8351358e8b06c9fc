//! Vaastavik - Terminal UI news credibility checker
//!
//! This crate provides a placeholder credibility analyzer for pasted news
//! articles, with a terminal-based user interface and report exporters.

pub mod analyzer;
pub mod export;
pub mod ui;
