//! Terminal lifecycle.
//!
//! [`TerminalManager`] owns the ratatui terminal and restores the user's
//! terminal when dropped. [`install_hooks`] covers the panic path, where
//! drop may never run.
//!
//! ```no_run
//! use clgmate::terminal::{install_hooks, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     install_hooks()?;
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::install_hooks;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::UiError;

/// Alternate-screen terminal that restores itself on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self, UiError> {
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                emergency_restore();
                return Err(init_failed(e));
            }
        };
        if let Err(e) = terminal.clear() {
            emergency_restore();
            return Err(init_failed(e));
        }

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now instead of at drop. Later calls do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}

fn init_failed(e: io::Error) -> UiError {
    UiError::TerminalInitFailed {
        message: e.to_string(),
    }
}
