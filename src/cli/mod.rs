//! cli
//!
//! Command-line entry point for phonedeck.
//!
//! # Responsibilities
//!
//! - Parse flags and load configuration (flags override the config file)
//! - Build the command tree, service client and action executor
//! - Run the password gate, then the interactive session
//!
//! # Architecture
//!
//! The CLI layer is thin. Resolution lives in [`crate::core::dispatch`],
//! the loop in [`crate::session`], and actions in [`crate::actions`].

pub mod args;

pub use args::Cli;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};

use crate::actions::{self, Actions};
use crate::core::config::{schema::validate_server_url, Config};
use crate::gate;
use crate::remote::HttpDeviceApi;
use crate::session::{Session, SessionOutcome};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// Effective settings after applying flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub help_file: PathBuf,
    pub prompt: String,
    pub password_gate: bool,
    pub request_timeout: Duration,
    pub verbosity: Verbosity,
}

impl Settings {
    /// Merge CLI flags over loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `--server` is not an http(s) URL or `--prompt`
    /// is blank.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let server_url = match &cli.server {
            Some(url) => {
                validate_server_url(url)?;
                url.clone()
            }
            None => config.server_url(),
        };

        let prompt = match &cli.prompt {
            Some(prompt) if prompt.trim().is_empty() => {
                anyhow::bail!("Prompt cannot be empty.")
            }
            Some(prompt) => prompt.clone(),
            None => config.prompt().to_string(),
        };

        Ok(Self {
            server_url,
            help_file: cli.help_file.clone().unwrap_or_else(|| config.help_file()),
            prompt,
            password_gate: config.password_gate() && !cli.no_password,
            request_timeout: config.request_timeout(),
            verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        })
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let settings = Settings::resolve(&cli, &config)?;

    if let Some(path) = config.loaded_from() {
        output::debug(
            format!("loaded config from {}", path.display()),
            settings.verbosity,
        );
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_console(&settings, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Run the password gate (if enabled) and the session over the given streams.
pub fn run_console<R: BufRead, W: Write>(
    settings: &Settings,
    mut input: R,
    out: &mut W,
) -> Result<SessionOutcome> {
    let tree = actions::command_tree().context("Invalid command tree")?;
    let api = HttpDeviceApi::new(settings.server_url.clone(), settings.request_timeout)?;
    let actions = Actions::new(
        Arc::new(api),
        settings.help_file.clone(),
        settings.verbosity,
    )?;

    output::debug(
        format!("device service at {}", settings.server_url),
        settings.verbosity,
    );
    if !settings.help_file.exists() {
        output::warn(
            format!(
                "help file '{}' not found; `show help` will fail",
                settings.help_file.display()
            ),
            settings.verbosity,
        );
    }

    if settings.password_gate {
        gate::prompt_and_submit(&actions, prompts::stdin_is_terminal(), &mut input, out)
            .context("Password gate failed (use --no-password to skip it)")?;
    }

    let outcome = Session::new(&tree, settings.prompt.clone())
        .with_verbosity(settings.verbosity)
        .run(input, out, |action, out| actions.run(*action, out))
        .context("Console I/O failed")?;

    output::debug(
        format!(
            "session ended ({:?}): {} commands, {} failed",
            outcome.end, outcome.stats.dispatched, outcome.stats.failed
        ),
        settings.verbosity,
    );

    Ok(outcome)
}
