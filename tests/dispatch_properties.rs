//! Property-based tests for command resolution.
//!
//! These tests use proptest to verify that resolution over the console's
//! command tree behaves the same for arbitrary token sequences.

use proptest::prelude::*;

use phonedeck::actions::{command_tree, ActionId};
use phonedeck::core::dispatch::{dispatch, resolve, Resolution, Resolved};
use phonedeck::core::tokens::{is_exit, normalize, tokenize};
use phonedeck::core::tree::CommandTree;

/// Words that appear in the tree plus a few that never do.
fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("show".to_string()),
        Just("make".to_string()),
        Just("contacts".to_string()),
        Just("sms".to_string()),
        Just("help".to_string()),
        Just("logs".to_string()),
        Just("image".to_string()),
        Just("exit".to_string()),
        "[a-z]{1,8}",
    ]
}

fn phrase() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..6)
}

/// Runs of spaces and tabs.
fn gap() -> impl Strategy<Value = String> {
    "[ \t]{1,4}"
}

fn reversed_tree() -> CommandTree<ActionId> {
    CommandTree::builder()
        .namespace("make", |ns| ns.action("image", ActionId::MakeImage))
        .namespace("show", |ns| {
            ns.action("logs", ActionId::ShowLogs)
                .action("help", ActionId::ShowHelp)
                .action("sms", ActionId::ShowSms)
                .action("contacts", ActionId::ShowContacts)
        })
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn resolution_consumes_at_most_depth_tokens(tokens in phrase()) {
        let tree = command_tree().unwrap();
        if let Resolved::Action { consumed, .. } = resolve(&tree, &tokens) {
            prop_assert!(consumed <= tree.depth());
            prop_assert!(consumed <= tokens.len());
        }
    }

    #[test]
    fn unknown_reports_first_mismatching_token(tokens in phrase()) {
        let tree = command_tree().unwrap();
        if let Resolved::Unknown(word) = resolve(&tree, &tokens) {
            // The shortest prefix that already fails ends at the mismatch.
            let end = (1..=tokens.len())
                .find(|&n| matches!(resolve(&tree, &tokens[..n]), Resolved::Unknown(_)));
            prop_assert!(end.is_some());
            let end = end.unwrap();
            prop_assert_eq!(&tokens[end - 1], &word);

            match resolve(&tree, &tokens[..end - 1]) {
                Resolved::Incomplete { namespace } => {
                    prop_assert!(namespace.child(&word).is_none());
                }
                other => prop_assert!(false, "prefix resolved to {:?}", other),
            }
        }
    }

    #[test]
    fn trailing_tokens_never_change_the_action(extra in phrase()) {
        let tree = command_tree().unwrap();
        for (path, action) in tree.paths() {
            let mut tokens: Vec<String> = path.iter().map(|w| w.to_string()).collect();
            let len = tokens.len();
            tokens.extend(extra.iter().cloned());

            prop_assert_eq!(
                resolve(&tree, &tokens),
                Resolved::Action { action, consumed: len }
            );
        }
    }

    #[test]
    fn declaration_order_does_not_matter(tokens in phrase()) {
        let forward = command_tree().unwrap();
        let backward = reversed_tree();

        let a = match resolve(&forward, &tokens) {
            Resolved::Action { action, consumed } => Some((*action, consumed)),
            _ => None,
        };
        let b = match resolve(&backward, &tokens) {
            Resolved::Action { action, consumed } => Some((*action, consumed)),
            _ => None,
        };
        prop_assert_eq!(a, b);
    }

    #[test]
    fn dispatch_invokes_at_most_once(tokens in phrase()) {
        let tree = command_tree().unwrap();
        let mut calls = 0;
        let outcome = dispatch(&tree, &tokens, |_| {
            calls += 1;
            Ok(())
        })
        .unwrap();

        match outcome {
            Resolution::Invoked => prop_assert_eq!(calls, 1),
            _ => prop_assert_eq!(calls, 0),
        }
    }

    #[test]
    fn resolution_is_repeatable(tokens in phrase()) {
        let tree = command_tree().unwrap();
        prop_assert_eq!(resolve(&tree, &tokens), resolve(&tree, &tokens));
    }

    #[test]
    fn whitespace_padding_is_normalized(
        words in prop::collection::vec("[a-z]{1,8}", 1..5),
        gaps in prop::collection::vec(gap(), 6),
    ) {
        let mut line = gaps[0].clone();
        for (i, w) in words.iter().enumerate() {
            line.push_str(w);
            line.push_str(&gaps[i + 1]);
        }

        let normalized = normalize(&line);
        prop_assert_eq!(&normalized, &words.join(" "));
        prop_assert_eq!(normalize(&normalized), normalized.clone());
        prop_assert_eq!(tokenize(&normalized), words);
    }

    #[test]
    fn exit_only_matches_alone(extra in "[a-z]{1,8}", pad in gap()) {
        let padded = format!("{}exit{}", pad, pad);
        let with_argument = format!("exit {}", extra);
        prop_assert!(is_exit(&normalize(&padded)));
        prop_assert!(!is_exit(&normalize(&with_argument)));
    }
}

#[test]
fn every_strict_prefix_is_incomplete() {
    let tree = command_tree().unwrap();
    for (path, _) in tree.paths() {
        for len in 0..path.len() {
            let prefix: Vec<&str> = path[..len].iter().map(|w| w.as_str()).collect();
            assert!(
                matches!(resolve(&tree, &prefix), Resolved::Incomplete { .. }),
                "prefix {:?} should be incomplete",
                prefix
            );
        }
    }
}
