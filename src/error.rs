use std::io;

use thiserror::Error;

/// Top-level failures the binary can exit with.
///
/// Gameplay outcomes (wall hits, self-collision) are not errors; they end the
/// session through its state machine. Only terminal plumbing can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal setup failed: {0}")]
    TerminalSetup(#[source] io::Error),

    #[error("drawing to the terminal failed: {0}")]
    Draw(#[source] io::Error),
}
