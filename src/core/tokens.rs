//! core::tokens
//!
//! Whitespace normalization and tokenization of operator input.
//!
//! Any run of Unicode whitespace is a single separator; leading and
//! trailing whitespace is dropped. Tokens are therefore never empty.

/// The input line that ends an interactive session.
pub const EXIT_SENTINEL: &str = "exit";

/// Collapse whitespace runs to single spaces and trim the ends.
///
/// ```
/// use phonedeck::core::tokens::normalize;
///
/// assert_eq!(normalize("  show    contacts  "), "show contacts");
/// assert_eq!(normalize("\t\n"), "");
/// ```
pub fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a line into tokens.
///
/// ```
/// use phonedeck::core::tokens::tokenize;
///
/// assert_eq!(tokenize("make   image"), vec!["make", "image"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Whether a normalized line is exactly the exit sentinel.
pub fn is_exit(normalized: &str) -> bool {
    normalized == EXIT_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(normalize("show   contacts"), "show contacts");
        assert_eq!(normalize("show\t\tsms"), "show sms");
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize("   make image   "), "make image");
    }

    #[test]
    fn padded_and_plain_input_tokenize_identically() {
        assert_eq!(tokenize("  show    contacts  "), tokenize("show contacts"));
    }

    #[test]
    fn tokens_are_never_empty() {
        for line in ["", " ", "a  b", "\ta\n\nb\r\n", " x "] {
            assert!(tokenize(line).iter().all(|t| !t.is_empty()), "{line:?}");
        }
    }

    #[test]
    fn exit_sentinel_requires_whole_line() {
        assert!(is_exit(&normalize("exit")));
        assert!(is_exit(&normalize("   exit  ")));
        assert!(!is_exit(&normalize("exit now")));
        assert!(!is_exit(&normalize("EXIT")));
        assert!(!is_exit(&normalize("")));
    }
}
