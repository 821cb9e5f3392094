use std::io;

use thiserror::Error;

/// Failures surfaced by the terminal shell.
///
/// The game core itself is total over well-formed inputs and has no error
/// paths; only terminal I/O can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
