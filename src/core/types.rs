//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`CommandWord`] - Validated command word (one level of a command phrase)
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use phonedeck::core::types::CommandWord;
//!
//! let word = CommandWord::new("contacts").unwrap();
//! assert_eq!(word.as_str(), "contacts");
//!
//! assert!(CommandWord::new("").is_err());
//! assert!(CommandWord::new("two words").is_err());
//! ```

use std::fmt;

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid command word: {0}")]
    InvalidCommandWord(String),
}

/// A validated command word.
///
/// Command words are case-sensitive and must be:
/// - Non-empty
/// - Free of whitespace (a word is exactly one token of operator input)
/// - Free of ASCII control characters
///
/// # Example
///
/// ```
/// use phonedeck::core::types::CommandWord;
///
/// let name = CommandWord::new("show").unwrap();
/// assert_eq!(name.as_str(), "show");
/// assert_ne!(name, CommandWord::new("Show").unwrap());
///
/// assert!(CommandWord::new("").is_err());
/// assert!(CommandWord::new("a\tb").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandWord(String);

impl CommandWord {
    /// Create a new validated command word.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCommandWord` if the word is empty or
    /// contains whitespace or control characters.
    pub fn new(word: impl Into<String>) -> Result<Self, TypeError> {
        let word = word.into();
        Self::validate(&word)?;
        Ok(Self(word))
    }

    fn validate(word: &str) -> Result<(), TypeError> {
        if word.is_empty() {
            return Err(TypeError::InvalidCommandWord(
                "command word cannot be empty".into(),
            ));
        }

        if word.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidCommandWord(format!(
                "command word '{}' cannot contain whitespace",
                word.escape_debug()
            )));
        }

        if word.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidCommandWord(
                "command word cannot contain control characters".into(),
            ));
        }

        Ok(())
    }

    /// Get the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CommandWord {
    type Error = TypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CommandWord {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommandWord> for String {
    fn from(word: CommandWord) -> Self {
        word.0
    }
}

impl AsRef<str> for CommandWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod command_word {
        use super::*;

        #[test]
        fn valid_words() {
            assert!(CommandWord::new("show").is_ok());
            assert!(CommandWord::new("make-image").is_ok());
            assert!(CommandWord::new("v2").is_ok());
            assert!(CommandWord::new("überblick").is_ok());
        }

        #[test]
        fn empty_rejected() {
            assert_eq!(
                CommandWord::new(""),
                Err(TypeError::InvalidCommandWord(
                    "command word cannot be empty".into()
                ))
            );
        }

        #[test]
        fn whitespace_rejected() {
            assert!(CommandWord::new("show contacts").is_err());
            assert!(CommandWord::new(" show").is_err());
            assert!(CommandWord::new("show\n").is_err());
            assert!(CommandWord::new("a\u{00a0}b").is_err());
        }

        #[test]
        fn control_chars_rejected() {
            assert!(CommandWord::new("sh\x07ow").is_err());
        }

        #[test]
        fn case_sensitive() {
            let lower = CommandWord::new("sms").unwrap();
            let upper = CommandWord::new("SMS").unwrap();
            assert_ne!(lower, upper);
        }

        #[test]
        fn display_and_conversions() {
            let word = CommandWord::try_from("logs").unwrap();
            assert_eq!(word.to_string(), "logs");
            let borrowed: &str = word.as_ref();
            assert_eq!(borrowed, "logs");
            let s: String = word.into();
            assert_eq!(s, "logs");
        }
    }
}
