//! ui::spinner
//!
//! Transient progress feedback while an action blocks on the service.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner template; falls back to indicatif's default if it fails to parse.
const TEMPLATE: &str = "{msg}{spinner}";

/// Dots that grow while waiting.
const TICKS: &[&str] = &[".  ", ".. ", "...", "   "];

/// A running spinner, cleared when finished or dropped.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Start a spinner with `message`, drawn to stderr.
    ///
    /// When `visible` is false nothing is drawn.
    pub fn start(message: &str, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        let style = ProgressStyle::with_template(TEMPLATE)
            .map(|s| s.tick_strings(TICKS))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        if visible {
            bar.enable_steady_tick(Duration::from_millis(250));
        }

        Self { bar }
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
