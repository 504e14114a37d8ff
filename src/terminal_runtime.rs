use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Terminal handle the matrix view draws into.
pub type MatrixTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw-mode and alternate-screen guard for one game run.
///
/// Restores the terminal best-effort on drop; the panic hook installed by the
/// binary calls [`restore_terminal`] for the unwind path as well.
pub struct TerminalSession {
    terminal: MatrixTerminal,
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        match open_alternate_screen() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                restore_terminal();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut MatrixTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn open_alternate_screen() -> io::Result<MatrixTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    Terminal::new(CrosstermBackend::new(stdout))
}

/// Best-effort terminal restore, safe to call from a panic hook.
pub fn restore_terminal() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
