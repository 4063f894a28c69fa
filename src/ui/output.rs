//! ui::output
//!
//! Output formatting and diagnostics.
//!
//! # Design
//!
//! Command results are written to the session's writer. Diagnostics go to
//! stderr and respect the verbosity derived from `--quiet` / `--debug`.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Whether progress indicators should be drawn.
    pub fn shows_progress(self) -> bool {
        self != Verbosity::Quiet
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a command phrase for display.
pub fn format_phrase<T: AsRef<str>>(words: &[T]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
