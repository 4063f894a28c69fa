//! core
//!
//! Core domain types and the command dispatcher.
//!
//! # Modules
//!
//! - [`types`] - Strong types: CommandWord
//! - [`tree`] - Command tree: namespaces and terminal actions
//! - [`tokens`] - Input normalization and tokenization
//! - [`dispatch`] - Resolution of token sequences against the tree
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - The command tree is validated once and never mutated
//! - Resolution is deterministic and side-effect free

pub mod config;
pub mod dispatch;
pub mod tokens;
pub mod tree;
pub mod types;
