//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Masked prompts are only shown in interactive mode. In non-interactive
//! mode they fail with a clear error message; callers that accept scripted
//! input read a plain line with [`line_from`] instead.

use std::io::{self, BufRead, IsTerminal, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Whether stdin is attached to a terminal.
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

/// Prompt for masked input (e.g., passwords).
///
/// The input is not echoed to the terminal. An interrupted or closed
/// input stream is reported as `Cancelled`.
pub fn password(message: &str, interactive: bool) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    rpassword::read_password().map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => PromptError::Cancelled,
        _ => PromptError::IoError(e.to_string()),
    })
}

/// Write `message` to `out` and read one line from `input`.
///
/// The line ending is removed; other whitespace is kept. Bytes that are
/// not UTF-8 are decoded lossily. End of input is `Cancelled`.
pub fn line_from<R: BufRead + ?Sized>(
    message: &str,
    input: &mut R,
    out: &mut dyn Write,
) -> Result<String, PromptError> {
    write!(out, "{}", message).map_err(|e| PromptError::IoError(e.to_string()))?;
    out.flush()
        .map_err(|e| PromptError::IoError(e.to_string()))?;

    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .map_err(|e| PromptError::IoError(e.to_string()))?;
    if read == 0 {
        return Err(PromptError::Cancelled);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
