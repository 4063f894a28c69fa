//! session
//!
//! The interactive read-dispatch-print loop.
//!
//! # Loop
//!
//! 1. Write the prompt and read one line
//! 2. Normalize whitespace
//! 3. `exit` alone ends the session; a blank line re-prompts
//! 4. Otherwise tokenize and dispatch against the command tree
//!
//! Any failure (unknown word, incomplete phrase, or an action error) is
//! reported as `Invalid Command` plus the error detail, and the loop
//! continues. End of input ends the session like `exit`. Input bytes that
//! are not UTF-8 are decoded lossily, so such a line is reported as an
//! unknown command. Only I/O errors on the session's own streams stop the
//! loop early.
//!
//! # Example
//!
//! ```
//! use phonedeck::core::tree::CommandTree;
//! use phonedeck::session::{Session, SessionEnd};
//! use std::io::Write;
//!
//! let tree = CommandTree::builder()
//!     .namespace("say", |ns| ns.action("hello", "hello"))
//!     .build()
//!     .unwrap();
//!
//! let input = "say hello\nsay nothing\nexit\n".as_bytes();
//! let mut out = Vec::new();
//! let outcome = Session::new(&tree, "> ")
//!     .run(input, &mut out, |word, out| {
//!         writeln!(out, "{}", word)?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(outcome.end, SessionEnd::ExitCommand);
//! assert_eq!(outcome.stats.failed, 1);
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("hello\n"));
//! assert!(text.contains("Invalid Command\nunknown command 'nothing'\n"));
//! ```

use std::io::{self, BufRead, Write};

use crate::core::dispatch::{self, DispatchError};
use crate::core::tokens;
use crate::core::tree::CommandTree;
use crate::ui::output::{self, Verbosity};

/// Notice printed before the detail of any failed command.
pub const FAILURE_NOTICE: &str = "Invalid Command";

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator typed the exit sentinel.
    ExitCommand,
    /// Input was closed.
    EndOfInput,
}

/// Counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines handed to the dispatcher.
    pub dispatched: usize,
    /// Dispatched lines that failed.
    pub failed: usize,
}

/// Result of [`Session::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub end: SessionEnd,
    pub stats: SessionStats,
}

/// What happened to a single input line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The exit sentinel.
    Exit,
    /// Blank line; nothing dispatched.
    Skipped,
    /// An action ran successfully.
    Completed,
    /// Dispatch failed; the notice has been written.
    Failed,
}

/// An interactive session over a command tree.
pub struct Session<'t, A> {
    tree: &'t CommandTree<A>,
    prompt: String,
    verbosity: Verbosity,
}

impl<'t, A> Session<'t, A> {
    /// Create a session that shows `prompt` before each line.
    pub fn new(tree: &'t CommandTree<A>, prompt: impl Into<String>) -> Self {
        Self {
            tree,
            prompt: prompt.into(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Set diagnostic verbosity.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Run until `exit` or end of input.
    ///
    /// `invoke` runs a resolved action and may write to the session output.
    ///
    /// # Errors
    ///
    /// Only I/O errors reading `input` or writing `out` are returned.
    pub fn run<R, W, F>(&self, mut input: R, out: &mut W, mut invoke: F) -> io::Result<SessionOutcome>
    where
        R: BufRead,
        W: Write,
        F: FnMut(&A, &mut W) -> anyhow::Result<()>,
    {
        let mut stats = SessionStats::default();
        let mut buf = Vec::new();

        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                // Keep the shell prompt on its own line after Ctrl-D.
                writeln!(out)?;
                return Ok(SessionOutcome {
                    end: SessionEnd::EndOfInput,
                    stats,
                });
            }

            // Invalid UTF-8 becomes U+FFFD and fails lookup like any unknown word.
            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line, out, &mut invoke)? {
                LineOutcome::Exit => {
                    return Ok(SessionOutcome {
                        end: SessionEnd::ExitCommand,
                        stats,
                    })
                }
                LineOutcome::Skipped => {}
                LineOutcome::Completed => stats.dispatched += 1,
                LineOutcome::Failed => {
                    stats.dispatched += 1;
                    stats.failed += 1;
                }
            }
        }
    }

    /// Handle one raw input line.
    pub fn handle_line<W, F>(&self, line: &str, out: &mut W, invoke: &mut F) -> io::Result<LineOutcome>
    where
        W: Write,
        F: FnMut(&A, &mut W) -> anyhow::Result<()>,
    {
        let normalized = tokens::normalize(line);

        if tokens::is_exit(&normalized) {
            return Ok(LineOutcome::Exit);
        }
        if normalized.is_empty() {
            return Ok(LineOutcome::Skipped);
        }

        let words = tokens::tokenize(&normalized);
        output::debug(
            format!("dispatching '{}'", output::format_phrase(&words)),
            self.verbosity,
        );

        match dispatch::execute(self.tree, &words, |action| invoke(action, &mut *out)) {
            Ok(()) => Ok(LineOutcome::Completed),
            Err(err) => {
                self.report(&err, out)?;
                Ok(LineOutcome::Failed)
            }
        }
    }

    fn report<W: Write>(&self, err: &DispatchError, out: &mut W) -> io::Result<()> {
        output::debug(format!("dispatch failed: {:?}", err), self.verbosity);
        writeln!(out, "{}", FAILURE_NOTICE)?;
        writeln!(out, "{}", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Act {
        Contacts,
        Sms,
        Image,
        Broken,
    }

    fn tree() -> CommandTree<Act> {
        CommandTree::builder()
            .namespace("show", |ns| {
                ns.action("contacts", Act::Contacts)
                    .action("sms", Act::Sms)
                    .action("broken", Act::Broken)
            })
            .namespace("make", |ns| ns.action("image", Act::Image))
            .build()
            .unwrap()
    }

    fn run_script(script: &str) -> (SessionOutcome, Vec<Act>, String) {
        let tree = tree();
        let invoked = RefCell::new(Vec::new());
        let mut out = Vec::new();

        let outcome = Session::new(&tree, "cmd >> ")
            .run(script.as_bytes(), &mut out, |act, out| {
                invoked.borrow_mut().push(*act);
                if *act == Act::Broken {
                    return Err(anyhow!("service unavailable"));
                }
                writeln!(out, "ran {:?}", act)?;
                Ok(())
            })
            .unwrap();

        (outcome, invoked.into_inner(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn exit_ends_session() {
        let (outcome, invoked, _) = run_script("exit\nshow sms\n");
        assert_eq!(outcome.end, SessionEnd::ExitCommand);
        assert!(invoked.is_empty());
    }

    #[test]
    fn padded_exit_matches_sentinel() {
        let (outcome, _, _) = run_script("   exit   \n");
        assert_eq!(outcome.end, SessionEnd::ExitCommand);
    }

    #[test]
    fn exit_with_arguments_is_dispatched_as_unknown() {
        let (outcome, invoked, text) = run_script("exit now\n");
        assert_eq!(outcome.end, SessionEnd::EndOfInput);
        assert!(invoked.is_empty());
        assert!(text.contains("Invalid Command\nunknown command 'exit'\n"));
    }

    #[test]
    fn failures_do_not_stop_the_loop() {
        let (outcome, invoked, text) =
            run_script("show bogus\nshow\nshow broken\nshow sms\nexit\n");

        assert_eq!(outcome.end, SessionEnd::ExitCommand);
        assert_eq!(invoked, vec![Act::Broken, Act::Sms]);
        assert_eq!(
            outcome.stats,
            SessionStats {
                dispatched: 4,
                failed: 3
            }
        );
        assert!(text.contains("unknown command 'bogus'"));
        assert!(text.contains("incomplete command; expected one of: contacts, sms, broken"));
        assert!(text.contains("Invalid Command\nservice unavailable\n"));
        assert!(text.contains("ran Sms"));
    }

    #[test]
    fn whitespace_is_normalized_before_dispatch() {
        let (_, invoked, _) = run_script("  show    contacts  \n\tmake\timage\n");
        assert_eq!(invoked, vec![Act::Contacts, Act::Image]);
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let (outcome, invoked, text) = run_script("make image now\nexit\n");
        assert_eq!(invoked, vec![Act::Image]);
        assert_eq!(outcome.stats.failed, 0);
        assert!(!text.contains(FAILURE_NOTICE));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (outcome, invoked, text) = run_script("\n   \nexit\n");
        assert!(invoked.is_empty());
        assert_eq!(outcome.stats, SessionStats::default());
        assert!(!text.contains(FAILURE_NOTICE));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (outcome, invoked, _) = run_script("show sms");
        assert_eq!(outcome.end, SessionEnd::EndOfInput);
        assert_eq!(invoked, vec![Act::Sms]);
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_session_continues() {
        let tree = tree();
        let mut invoked = Vec::new();
        let mut out = Vec::new();
        let input: &[u8] = b"show \xff\xfe\nshow sms\nexit\n";

        let outcome = Session::new(&tree, "cmd >> ")
            .run(input, &mut out, |act, _| {
                invoked.push(*act);
                Ok(())
            })
            .unwrap();

        assert_eq!(outcome.end, SessionEnd::ExitCommand);
        assert_eq!(invoked, vec![Act::Sms]);
        assert_eq!(
            outcome.stats,
            SessionStats {
                dispatched: 2,
                failed: 1
            }
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid Command\nunknown command '\u{fffd}\u{fffd}'\n"));
    }

    #[test]
    fn prompt_is_written_before_each_line() {
        let (_, _, text) = run_script("show sms\nexit\n");
        assert_eq!(text.matches("cmd >> ").count(), 2);
    }

    #[test]
    fn custom_prompt() {
        let tree = tree();
        let mut out = Vec::new();
        Session::new(&tree, "phone> ")
            .run("exit\n".as_bytes(), &mut out, |_, _| Ok(()))
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "phone> ");
    }
}
