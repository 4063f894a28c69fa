//! core::tree
//!
//! The command tree: a static, hierarchical namespace of command words.
//!
//! # Structure
//!
//! Every node is exactly one of:
//! - [`Node::Namespace`] - a set of uniquely named children
//! - [`Node::Action`] - a terminal action handle
//!
//! The root is always a namespace. Trees are built once through
//! [`TreeBuilder`], validated, and never mutated afterwards.
//!
//! # Validation
//!
//! [`TreeBuilder::build`] rejects:
//! - Invalid command words (see [`CommandWord`])
//! - Empty namespaces, including an empty root
//! - Duplicate sibling words
//!
//! Declarations are ordered lists of pairs, so duplicates are checked
//! explicitly rather than silently overwritten.
//!
//! # Example
//!
//! ```
//! use phonedeck::core::tree::CommandTree;
//!
//! let tree = CommandTree::builder()
//!     .namespace("show", |ns| ns.action("contacts", 1).action("sms", 2))
//!     .namespace("make", |ns| ns.action("image", 3))
//!     .build()
//!     .unwrap();
//!
//! let show = tree.root().child("show").unwrap();
//! assert!(!show.is_action());
//! assert_eq!(show.child("sms").and_then(|n| n.as_action()), Some(&2));
//! assert_eq!(tree.depth(), 2);
//! ```

use std::collections::HashSet;

use thiserror::Error;

use super::types::{CommandWord, TypeError};

/// Errors from command tree construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("invalid command word at '{path}': {source}")]
    InvalidWord {
        path: String,
        #[source]
        source: TypeError,
    },

    #[error("namespace '{path}' has no commands")]
    EmptyNamespace { path: String },

    #[error("duplicate command '{word}' in namespace '{path}'")]
    DuplicateWord { path: String, word: String },
}

/// A node in the command tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<A> {
    /// A further level of command words.
    Namespace(Namespace<A>),
    /// A terminal action.
    Action(A),
}

impl<A> Node<A> {
    /// Look up a child by command word.
    ///
    /// Always `None` for actions.
    pub fn child(&self, word: &str) -> Option<&Node<A>> {
        match self {
            Node::Namespace(ns) => ns.child(word),
            Node::Action(_) => None,
        }
    }

    /// Whether this node is a terminal action.
    pub fn is_action(&self) -> bool {
        matches!(self, Node::Action(_))
    }

    /// The action handle, if this node is an action.
    pub fn as_action(&self) -> Option<&A> {
        match self {
            Node::Action(action) => Some(action),
            Node::Namespace(_) => None,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Action(_) => 0,
            Node::Namespace(ns) => ns.depth(),
        }
    }
}

/// A non-empty set of uniquely named children, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace<A> {
    entries: Vec<(CommandWord, Node<A>)>,
}

impl<A> Namespace<A> {
    /// Look up a child by command word (case-sensitive).
    pub fn child(&self, word: &str) -> Option<&Node<A>> {
        self.entries
            .iter()
            .find(|(name, _)| name.as_str() == word)
            .map(|(_, node)| node)
    }

    /// Iterate children in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&CommandWord, &Node<A>)> {
        self.entries.iter().map(|(name, node)| (name, node))
    }

    /// Child command words in declaration order.
    pub fn words(&self) -> impl Iterator<Item = &CommandWord> {
        self.entries.iter().map(|(name, _)| name)
    }

    fn depth(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| 1 + node.depth())
            .max()
            .unwrap_or(0)
    }
}

/// A validated, immutable command tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTree<A> {
    root: Namespace<A>,
}

impl<A> CommandTree<A> {
    /// Start declaring a tree.
    pub fn builder() -> TreeBuilder<A> {
        TreeBuilder::new()
    }

    /// The root namespace.
    pub fn root(&self) -> &Namespace<A> {
        &self.root
    }

    /// Length of the longest command phrase (root to action).
    ///
    /// Resolution never takes more steps than this.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Every command phrase with its action, in declaration order.
    pub fn paths(&self) -> Vec<(Vec<&CommandWord>, &A)> {
        let mut out = Vec::new();
        collect_paths(&self.root, &mut Vec::new(), &mut out);
        out
    }
}

fn collect_paths<'a, A>(
    ns: &'a Namespace<A>,
    prefix: &mut Vec<&'a CommandWord>,
    out: &mut Vec<(Vec<&'a CommandWord>, &'a A)>,
) {
    for (word, node) in ns.iter() {
        prefix.push(word);
        match node {
            Node::Action(action) => out.push((prefix.clone(), action)),
            Node::Namespace(child) => collect_paths(child, prefix, out),
        }
        prefix.pop();
    }
}

/// Unvalidated declaration of one child.
#[derive(Debug, Clone)]
enum Decl<A> {
    Namespace(TreeBuilder<A>),
    Action(A),
}

/// Builder for a [`CommandTree`] (and, nested, for each namespace in it).
#[derive(Debug, Clone)]
pub struct TreeBuilder<A> {
    entries: Vec<(String, Decl<A>)>,
}

impl<A> Default for TreeBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TreeBuilder<A> {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declare a terminal action.
    pub fn action(mut self, word: impl Into<String>, action: A) -> Self {
        self.entries.push((word.into(), Decl::Action(action)));
        self
    }

    /// Declare a nested namespace.
    pub fn namespace(
        mut self,
        word: impl Into<String>,
        declare: impl FnOnce(TreeBuilder<A>) -> TreeBuilder<A>,
    ) -> Self {
        let nested = declare(TreeBuilder::new());
        self.entries.push((word.into(), Decl::Namespace(nested)));
        self
    }

    /// Validate the declaration and build the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeError`] found, walking the declaration
    /// depth-first in order.
    pub fn build(self) -> Result<CommandTree<A>, TreeError> {
        let root = self.build_namespace(&[])?;
        Ok(CommandTree { root })
    }

    fn build_namespace(self, path: &[&str]) -> Result<Namespace<A>, TreeError> {
        if self.entries.is_empty() {
            return Err(TreeError::EmptyNamespace {
                path: display_path(path),
            });
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(self.entries.len());

        for (raw, decl) in self.entries {
            let word = CommandWord::new(raw.as_str()).map_err(|source| TreeError::InvalidWord {
                path: display_path(path),
                source,
            })?;

            if !seen.insert(raw.clone()) {
                return Err(TreeError::DuplicateWord {
                    path: display_path(path),
                    word: raw,
                });
            }

            let node = match decl {
                Decl::Action(action) => Node::Action(action),
                Decl::Namespace(nested) => {
                    let mut child_path = path.to_vec();
                    child_path.push(raw.as_str());
                    Node::Namespace(nested.build_namespace(&child_path)?)
                }
            };

            entries.push((word, node));
        }

        Ok(Namespace { entries })
    }
}

fn display_path(path: &[&str]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(" ")
    }
}
