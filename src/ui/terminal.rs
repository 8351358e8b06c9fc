//! Terminal setup and teardown
//!
//! Raw mode, the alternate screen and bracketed paste are enabled for the
//! lifetime of a [`Tui`] and restored exactly once, either by
//! [`Tui::restore`] or on drop.

use std::io;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Tracks whether terminal modes still need to be undone
#[derive(Debug, Default)]
struct RestoreState {
    restored: bool,
}

impl RestoreState {
    /// Returns true the first time it is called, false afterwards
    fn begin_restore(&mut self) -> bool {
        !std::mem::replace(&mut self.restored, true)
    }
}

/// Owns the terminal while the UI is running
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: RestoreState,
}

impl Tui {
    /// Initialize the terminal
    ///
    /// Modes already switched on are switched back off if a later setup
    /// step fails.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                state: RestoreState::default(),
            }),
            Err(err) => {
                let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    /// Get mutable reference to the terminal
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal; later calls are no-ops
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.state.begin_restore() {
            return Ok(());
        }
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
