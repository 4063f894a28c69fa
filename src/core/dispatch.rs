//! core::dispatch
//!
//! Resolution of a token sequence against a [`CommandTree`].
//!
//! # Algorithm
//!
//! Starting at the root namespace, each token is looked up directly among
//! the children of the current namespace:
//!
//! - no child with that word: [`Resolved::Unknown`]
//! - the child is an action: [`Resolved::Action`], remaining tokens ignored
//! - the child is a namespace: descend and take the next token
//!
//! Running out of tokens while still at a namespace is
//! [`Resolved::Incomplete`]. Each step consumes one token and descends one
//! level, so a walk never takes more than [`CommandTree::depth`] steps.
//!
//! # Purity
//!
//! [`resolve`] only reads the tree. [`dispatch`] adds exactly one side
//! effect: invoking the resolved action, at most once.
//!
//! # Example
//!
//! ```
//! use phonedeck::core::dispatch::{dispatch, Resolution};
//! use phonedeck::core::tree::CommandTree;
//!
//! let tree = CommandTree::builder()
//!     .namespace("show", |ns| ns.action("contacts", "contacts").action("sms", "sms"))
//!     .build()
//!     .unwrap();
//!
//! let mut ran = Vec::new();
//! let outcome = dispatch(&tree, &["show", "sms"], |action| {
//!     ran.push(*action);
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(outcome, Resolution::Invoked);
//! assert_eq!(ran, vec!["sms"]);
//! ```

use thiserror::Error;

use super::tree::{CommandTree, Namespace, Node};

/// Errors from dispatching a command phrase.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A token matched no child of the current namespace.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Tokens ran out before an action was reached.
    #[error("incomplete command; expected one of: {}", .expected.join(", "))]
    IncompleteCommand {
        /// Words accepted at the namespace where input stopped.
        expected: Vec<String>,
    },

    /// The resolved action failed.
    #[error("{0:#}")]
    ActionFailure(#[source] anyhow::Error),
}

/// Result of a pure tree walk.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved<'t, A> {
    /// An action was reached after consuming `consumed` tokens.
    Action { action: &'t A, consumed: usize },
    /// Tokens ran out inside `namespace`.
    Incomplete { namespace: &'t Namespace<A> },
    /// A token had no match at its level.
    Unknown(String),
}

/// Outcome of [`dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The terminal action ran to completion.
    Invoked,
    /// Tokens ran out at a namespace; nothing ran.
    Incomplete { expected: Vec<String> },
    /// A token did not match; nothing ran.
    Unknown(String),
}

impl Resolution {
    /// Convert non-invoking outcomes into their [`DispatchError`].
    pub fn into_result(self) -> Result<(), DispatchError> {
        match self {
            Resolution::Invoked => Ok(()),
            Resolution::Incomplete { expected } => {
                Err(DispatchError::IncompleteCommand { expected })
            }
            Resolution::Unknown(word) => Err(DispatchError::UnknownCommand(word)),
        }
    }
}

/// Walk the tree along `tokens` without invoking anything.
pub fn resolve<'t, A, S: AsRef<str>>(tree: &'t CommandTree<A>, tokens: &[S]) -> Resolved<'t, A> {
    let mut current = tree.root();
    let mut cursor = 0;

    while let Some(token) = tokens.get(cursor) {
        let word = token.as_ref();
        cursor += 1;

        match current.child(word) {
            None => return Resolved::Unknown(word.to_string()),
            Some(Node::Action(action)) => {
                return Resolved::Action {
                    action,
                    consumed: cursor,
                }
            }
            Some(Node::Namespace(ns)) => current = ns,
        }
    }

    Resolved::Incomplete { namespace: current }
}

/// Resolve `tokens` and invoke the terminal action, if any.
///
/// Unknown and incomplete phrases are reported as [`Resolution`] values and
/// invoke nothing. An action error is returned as
/// [`DispatchError::ActionFailure`].
pub fn dispatch<A, S, F>(
    tree: &CommandTree<A>,
    tokens: &[S],
    invoke: F,
) -> Result<Resolution, DispatchError>
where
    S: AsRef<str>,
    F: FnOnce(&A) -> anyhow::Result<()>,
{
    match resolve(tree, tokens) {
        Resolved::Action { action, .. } => {
            invoke(action).map_err(DispatchError::ActionFailure)?;
            Ok(Resolution::Invoked)
        }
        Resolved::Incomplete { namespace } => Ok(Resolution::Incomplete {
            expected: namespace.words().map(|w| w.to_string()).collect(),
        }),
        Resolved::Unknown(word) => Ok(Resolution::Unknown(word)),
    }
}

/// [`dispatch`], with unknown and incomplete phrases as errors.
pub fn execute<A, S, F>(tree: &CommandTree<A>, tokens: &[S], invoke: F) -> Result<(), DispatchError>
where
    S: AsRef<str>,
    F: FnOnce(&A) -> anyhow::Result<()>,
{
    dispatch(tree, tokens, invoke)?.into_result()
}
