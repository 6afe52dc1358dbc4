//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on exit, even during panics.
//! - Manage raw mode and alternate screen cleanup via Drop trait.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the session.
//! - Drop implementation must not panic.

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores the terminal when dropped.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Create a new terminal guard.
    ///
    /// # Arguments
    /// * `no_mouse` - Whether mouse capture was disabled during setup
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored; drop must not panic.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen, Show);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show);
        }
    }
}
