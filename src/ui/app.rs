//! Application state and TUI event loop
//!
//! Manages the input text and the current analysis result, and handles
//! user input for the credibility checker screen.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use super::editor::TextEditor;
use crate::analyzer::{is_analyzable, AnalysisResult, Analyzer, ScoreBand};

/// Placeholder shown while the input area is empty
pub const PLACEHOLDER: &str = "Paste your news article here...";

/// Label of the analyze control
pub const ANALYZE_LABEL: &str = "Analyze Content";

/// Feature blurbs shown under the checker
const FEATURES: [(&str, &str, Color); 3] = [
    (
        "AI-Powered Analysis",
        "Advanced algorithms analyze content patterns and linguistic markers.",
        Color::Indexed(63),
    ),
    (
        "Instant Results",
        "Get immediate feedback on content credibility and potential red flags.",
        Color::Green,
    ),
    (
        "Detailed Insights",
        "Comprehensive analysis with specific issues and credibility metrics.",
        Color::Blue,
    ),
];

/// Height of the results panel including borders
const RESULTS_HEIGHT: u16 = 12;

/// Which control receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    AnalyzeButton,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Editor => Focus::AnalyzeButton,
            Focus::AnalyzeButton => Focus::Editor,
        }
    }
}

/// Application state
pub struct App {
    /// The article text being edited
    pub editor: TextEditor,
    /// Result of the most recent analysis, if any
    pub result: Option<AnalysisResult>,
    /// Control that currently has focus
    pub focus: Focus,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Number of analyses run this session
    pub analyses_run: usize,
    analyzer: Analyzer,
}

impl App {
    /// Create a new application in the idle state
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            editor: TextEditor::new(),
            result: None,
            focus: Focus::Editor,
            should_quit: false,
            analyses_run: 0,
            analyzer,
        }
    }

    /// Current input text
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Replace the input text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.editor.set_text(text);
    }

    /// Insert text at the cursor
    pub fn insert_str(&mut self, text: &str) {
        self.editor.insert_str(text);
    }

    /// Whether the analyze control is enabled
    pub fn can_analyze(&self) -> bool {
        is_analyzable(self.editor.text())
    }

    /// Run an analysis, replacing any previous result
    ///
    /// Returns false without touching state when the control is disabled.
    pub fn analyze(&mut self) -> bool {
        match self.analyzer.analyze(self.editor.text()) {
            Some(result) => {
                self.result = Some(result);
                self.analyses_run += 1;
                true
            }
            None => false,
        }
    }

    /// Reset to an empty input with no result
    pub fn clear(&mut self) {
        self.editor.clear();
        self.result = None;
        self.focus = Focus::Editor;
        tracing::debug!("session cleared");
    }

    /// Signal that the application should quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch focus between the input area and the analyze control
    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// Handle a bracketed paste
    pub fn handle_paste(&mut self, text: &str) {
        self.focus = Focus::Editor;
        self.editor.insert_str(text);
        tracing::debug!(chars = text.chars().count(), "pasted text");
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.quit(),
                KeyCode::Char('r') => {
                    self.analyze();
                }
                KeyCode::Char('l') => self.clear(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::F(5) => {
                self.analyze();
            }
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Editor => self.handle_editor_key(key.code),
                Focus::AnalyzeButton => self.handle_button_key(key.code),
            },
        }
    }

    fn handle_editor_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.insert_char('\n'),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Delete => self.editor.delete(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.move_home(),
            KeyCode::End => self.editor.move_end(),
            _ => {}
        }
    }

    fn handle_button_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.analyze();
            }
            KeyCode::Up => self.focus = Focus::Editor,
            _ => {}
        }
    }
}

/// Get the bar colour for a score band
///
/// - High: Green
/// - Medium: Yellow
/// - Low: Red
pub fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::High => Color::Green,
        ScoreBand::Medium => Color::Yellow,
        ScoreBand::Low => Color::Red,
    }
}

/// Run the TUI application
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Paste(text) => app.handle_paste(&text),
            _ => {}
        }

        if app.should_quit {
            tracing::info!(analyses = app.analyses_run, "quitting");
            return Ok(());
        }
    }
}

/// Render the application UI
pub fn render(frame: &mut Frame, app: &App) {
    let results_height = if app.result.is_some() {
        RESULTS_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Length(2),              // Intro
            Constraint::Min(5),                 // Input
            Constraint::Length(3),              // Analyze control
            Constraint::Length(results_height), // Results
            Constraint::Length(5),              // Features
            Constraint::Length(3),              // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_intro(frame, chunks[1]);
    render_editor(frame, app, chunks[2]);
    render_button(frame, app, chunks[3]);
    if let Some(result) = &app.result {
        render_results(frame, result, chunks[4]);
    }
    render_features(frame, chunks[5]);
    render_footer(frame, app, chunks[6]);
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled("⛨ ", Style::default().fg(Color::Indexed(63))),
        Span::styled(
            "VAASTAVIK",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Verify Your News",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Paste your article or news content below to check its credibility.",
            Style::default().fg(Color::Gray),
        )),
    ]);
    frame.render_widget(intro, area);
}

/// Render the input area, scrolling to keep the cursor visible
fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Editor;
    let border_color = if focused {
        Color::Indexed(63)
    } else {
        Color::Gray
    };
    let block = Block::default()
        .title("Article")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    if app.editor.is_empty() {
        let placeholder = Paragraph::new(PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let (row, col) = app.editor.cursor_position();
    let scroll_y = row.saturating_sub(inner.height.saturating_sub(1) as usize);
    let scroll_x = col.saturating_sub(inner.width.saturating_sub(1) as usize);

    let paragraph = Paragraph::new(app.editor.text())
        .style(Style::default().fg(Color::White))
        .scroll((scroll_y as u16, scroll_x as u16))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((
            inner.x + (col - scroll_x) as u16,
            inner.y + (row - scroll_y) as u16,
        ));
    }
}

/// Render the analyze control, dimmed while disabled
fn render_button(frame: &mut Frame, app: &App, area: Rect) {
    let enabled = app.can_analyze();
    let focused = app.focus == Focus::AnalyzeButton;

    let (label_style, border_color) = match (enabled, focused) {
        (false, _) => (Style::default().fg(Color::DarkGray), Color::DarkGray),
        (true, true) => (
            Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(63))
                .add_modifier(Modifier::BOLD),
            Color::Indexed(63),
        ),
        (true, false) => (
            Style::default()
                .fg(Color::Indexed(63))
                .add_modifier(Modifier::BOLD),
            Color::Gray,
        ),
    };

    let mut spans = vec![Span::styled(format!(" ⌕ {} ", ANALYZE_LABEL), label_style)];
    if !enabled {
        spans.push(Span::styled(
            " (enter some text first)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let button = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(button, area);
}

/// Render the verdict, score bar and detected issues
fn render_results(frame: &mut Frame, result: &AnalysisResult, area: Rect) {
    let block = Block::default()
        .title("Analysis Results")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Verdict
            Constraint::Length(1),
            Constraint::Length(1), // Score label
            Constraint::Length(1), // Score bar
            Constraint::Length(1),
            Constraint::Min(0), // Issues
        ])
        .split(inner);

    let (icon, icon_color) = if result.verdict.is_reliable() {
        ("✔ ", Color::Green)
    } else {
        ("⚠ ", Color::Yellow)
    };
    let verdict = Paragraph::new(Line::from(vec![
        Span::styled(icon, Style::default().fg(icon_color)),
        Span::styled(
            result.verdict.headline(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(verdict, rows[0]);

    let score_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(rows[2]);
    frame.render_widget(
        Paragraph::new("Credibility Score").style(Style::default().fg(Color::Gray)),
        score_cols[0],
    );
    frame.render_widget(
        Paragraph::new(result.score_label())
            .alignment(Alignment::Right)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        score_cols[1],
    );

    let bar = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(band_color(result.band()))
                .bg(Color::DarkGray),
        )
        .ratio(result.ratio())
        .label("")
        .use_unicode(true);
    frame.render_widget(bar, rows[3]);

    let mut items = vec![ListItem::new(Line::from(vec![
        Span::styled("ⓘ ", Style::default().fg(Color::Indexed(63))),
        Span::styled(
            "Detected Issues:",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]))];
    items.extend(result.flags.iter().map(|flag| {
        ListItem::new(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Gray)),
            Span::raw(flag.as_str()),
        ]))
    }));
    frame.render_widget(List::new(items), rows[5]);
}

fn render_features(frame: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for ((title, blurb, color), col) in FEATURES.iter().zip(cols.iter()) {
        let card = Paragraph::new(Span::styled(*blurb, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(
                        *title,
                        Style::default().fg(*color).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(card, *col);
    }
}

/// Render the footer with key help
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Focus  "),
        Span::styled("Ctrl+R/F5", Style::default().fg(Color::Yellow)),
        Span::raw(" Analyze  "),
        Span::styled("Ctrl+L", Style::default().fg(Color::Yellow)),
        Span::raw(" Clear  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];
    if app.analyses_run > 0 {
        spans.push(Span::styled(
            format!("  [{} run]", app.analyses_run),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Verdict, DETECTED_ISSUES};
    use ratatui::backend::TestBackend;

    fn create_test_app() -> App {
        App::new(Analyzer::seeded(42))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_app_creation() {
        let app = create_test_app();
        assert_eq!(app.text(), "");
        assert!(app.result.is_none());
        assert!(!app.can_analyze());
        assert!(!app.should_quit);
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn test_analyze_disabled_for_blank_input() {
        let mut app = create_test_app();
        assert!(!app.analyze());
        assert!(app.result.is_none());

        app.set_text("   \n\t ");
        assert!(!app.can_analyze());
        assert!(!app.analyze());
        assert!(app.result.is_none());
        assert_eq!(app.analyses_run, 0);
    }

    #[test]
    fn test_analyze_produces_result() {
        let mut app = create_test_app();
        app.set_text("Breaking: scientists confirm...");
        assert!(app.can_analyze());
        assert!(app.analyze());

        let result = app.result.as_ref().unwrap();
        assert!(result.credibility >= 0.0 && result.credibility < 100.0);
        assert!(matches!(
            result.verdict,
            Verdict::Reliable | Verdict::Suspicious
        ));
        assert_eq!(result.flags, DETECTED_ISSUES.to_vec());
    }

    #[test]
    fn test_repeated_analyze_replaces_result() {
        let mut app = create_test_app();
        app.set_text("news");
        let mut expected = Analyzer::seeded(42);

        for _ in 0..5 {
            assert!(app.analyze());
            assert_eq!(app.result, expected.analyze("news"));
        }
        assert_eq!(app.analyses_run, 5);
    }

    #[test]
    fn test_blank_after_result_keeps_last_result() {
        let mut app = create_test_app();
        app.set_text("news");
        app.analyze();
        let before = app.result.clone();

        app.set_text("  ");
        assert!(!app.analyze());
        assert_eq!(app.result, before);
    }

    #[test]
    fn test_typing_and_analyze_keys() {
        let mut app = create_test_app();
        for c in "Hi".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.text(), "Hi");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.text(), "Hi\n");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.text(), "Hi");

        app.handle_key(ctrl('r'));
        assert!(app.result.is_some());

        app.handle_key(key(KeyCode::F(5)));
        assert_eq!(app.analyses_run, 2);
    }

    #[test]
    fn test_button_focus_and_enter() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::AnalyzeButton);

        // Disabled: Enter does nothing
        app.handle_key(key(KeyCode::Enter));
        assert!(app.result.is_none());

        app.set_text("Some article");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.result.is_some());
        // Enter on the button must not edit the text
        assert_eq!(app.text(), "Some article");

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn test_paste_enables_analyze() {
        let mut app = create_test_app();
        app.toggle_focus();
        app.handle_paste("Pasted\r\narticle");
        assert_eq!(app.focus, Focus::Editor);
        assert_eq!(app.text(), "Pasted\narticle");
        assert!(app.can_analyze());
    }

    #[test]
    fn test_clear() {
        let mut app = create_test_app();
        app.set_text("news");
        app.analyze();
        app.handle_key(ctrl('l'));
        assert_eq!(app.text(), "");
        assert!(app.result.is_none());
        assert!(!app.can_analyze());
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = create_test_app();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_band_color() {
        let reliable = |score| AnalysisResult::new(score, Verdict::Reliable);
        assert_eq!(band_color(reliable(85.0).band()), Color::Green);
        assert_eq!(band_color(reliable(55.0).band()), Color::Yellow);
        assert_eq!(band_color(reliable(10.0).band()), Color::Red);
    }

    #[test]
    fn test_cursor_after_wide_glyphs() {
        let mut app = create_test_app();
        app.set_text("日本語");

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        // Input block starts below header (3) and intro (2); inner area
        // is offset by the border. Three wide glyphs span six columns.
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.x, 7);
        assert_eq!(cursor.y, 6);
    }

    #[test]
    fn test_render_score_bar_colors() {
        for (score, expected) in [(85.0, Color::Green), (55.0, Color::Yellow), (10.0, Color::Red)] {
            let mut app = create_test_app();
            app.set_text("article");
            app.result = Some(AnalysisResult::new(score, Verdict::Reliable));

            let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
            terminal.draw(|frame| render(frame, &app)).unwrap();

            let filled = terminal
                .backend()
                .buffer()
                .content
                .iter()
                .find(|cell| cell.symbol() == ratatui::symbols::block::FULL)
                .unwrap_or_else(|| panic!("no filled bar cell for score {score}"));
            assert_eq!(filled.fg, expected, "wrong bar colour for score {score}");
        }
    }

    #[test]
    fn test_render_idle() {
        let app = create_test_app();
        let screen = render_to_string(&app);
        assert!(screen.contains("VAASTAVIK"));
        assert!(screen.contains("Verify Your News"));
        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains(ANALYZE_LABEL));
        assert!(screen.contains("(enter some text first)"));
        assert!(!screen.contains("Analysis Results"));
        assert!(screen.contains("Instant Results"));
    }

    #[test]
    fn test_render_with_result() {
        let mut app = create_test_app();
        app.set_text("Breaking: scientists confirm...");
        app.result = Some(AnalysisResult::new(85.0, Verdict::Reliable));

        let screen = render_to_string(&app);
        assert!(screen.contains("Breaking: scientists confirm..."));
        assert!(!screen.contains("(enter some text first)"));
        assert!(screen.contains("Analysis Results"));
        assert!(screen.contains("Content appears reliable"));
        assert!(screen.contains("Credibility Score"));
        assert!(screen.contains("85.0%"));
        assert!(screen.contains("Detected Issues:"));
        for flag in DETECTED_ISSUES {
            assert!(screen.contains(flag), "missing flag {flag}");
        }
    }

    #[test]
    fn test_render_suspicious_verdict() {
        let mut app = create_test_app();
        app.set_text("text");
        app.result = Some(AnalysisResult::new(10.0, Verdict::Suspicious));

        let screen = render_to_string(&app);
        assert!(screen.contains("Suspicious content detected"));
        assert!(screen.contains("10.0%"));
        assert!(!screen.contains("Content appears reliable"));
    }
}
