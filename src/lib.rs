//! Phonedeck - an interactive console for a phone-data companion service
//!
//! Phonedeck reads short command phrases such as `show contacts` or
//! `make image`, resolves them against a fixed command tree, and runs the
//! matching action against an HTTP device service.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, wires everything up)
//! - [`core`] - Command words, the command tree, tokenizing, and dispatch
//! - [`session`] - The read-dispatch-print loop
//! - [`actions`] - Terminal actions and the console's command tree
//! - [`gate`] - Startup password gate
//! - [`remote`] - Device service client abstraction
//! - [`help`] - YAML help file loading
//! - [`ui`] - Output, prompts, tables, and progress
//!
//! # Behavior
//!
//! 1. Resolution never executes anything; only a fully resolved phrase runs
//! 2. A failed command is reported and the session continues
//! 3. Only `exit` (or end of input) ends the session

pub mod actions;
pub mod cli;
pub mod core;
pub mod gate;
pub mod help;
pub mod remote;
pub mod session;
pub mod ui;
