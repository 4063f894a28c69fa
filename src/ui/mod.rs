//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive prompts (masked password input)
//! - [`output`] - Verbosity and diagnostics
//! - [`table`] - Table rendering for service records
//! - [`spinner`] - Progress feedback during blocking calls
//!
//! # Design
//!
//! All terminal presentation goes through this module so that the
//! dispatcher and session loop stay independent of rendering details.

pub mod output;
pub mod prompts;
pub mod spinner;
pub mod table;
