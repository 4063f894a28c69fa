//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--server <url>`: Device service base URL
//! - `--help-file <path>`: YAML help file shown by `show help`
//! - `--prompt <text>`: Session prompt
//! - `--no-password`: Skip the startup password gate
//! - `--config <path>`: Config file to load instead of the default locations
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output; no spinner

use clap::Parser;
use std::path::PathBuf;

/// phonedeck - interactive console for a phone-data companion service
#[derive(Parser, Debug)]
#[command(name = "phonedeck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
SESSION COMMANDS:
    show contacts    List unique contacts
    show sms         List text messages
    show logs        List the call log
    show help        Print the help file
    make image       Ask the device to build an image
    exit             Leave the console")]
pub struct Cli {
    /// Device service base URL (default: http://127.0.0.1:5000/)
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// YAML help file shown by `show help` (default: ./help.yaml)
    #[arg(long, value_name = "PATH")]
    pub help_file: Option<PathBuf>,

    /// Prompt shown before each command
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Skip the startup password gate
    #[arg(long)]
    pub no_password: bool,

    /// Load configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
