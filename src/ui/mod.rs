//! UI module for Vaastavik TUI
//!
//! This module provides the terminal user interface for pasting an
//! article, triggering an analysis and displaying the result.

mod app;
pub mod editor;
mod terminal;

pub use app::{band_color, render, run_app, App, Focus, ANALYZE_LABEL, PLACEHOLDER};
pub use editor::TextEditor;
pub use terminal::Tui;
