//! gate
//!
//! Startup password gate.
//!
//! Before the session starts the operator is asked for the device password,
//! which is posted to the service. With piped input the first line is the
//! password. The service's reply status is shown; the console itself makes
//! no decision based on it.

use std::io::{BufRead, Write};

use anyhow::{bail, Context as _, Result};

use crate::actions::Actions;
use crate::remote::GateReply;
use crate::ui::prompts;

/// Prompt shown when asking for the password.
pub const PROMPT: &str = "Password: ";

/// Ask for the password and submit it.
///
/// On a terminal the input is masked. Otherwise one line is read from
/// `input`, so scripted sessions can supply the password first.
pub fn prompt_and_submit<R: BufRead + ?Sized>(
    actions: &Actions,
    interactive: bool,
    input: &mut R,
    out: &mut dyn Write,
) -> Result<GateReply> {
    let password = if interactive {
        prompts::password(PROMPT, true)
    } else {
        prompts::line_from(PROMPT, input, &mut *out)
    }
    .context("Failed to read password")?;

    submit(actions, &password, out)
}

/// Submit `password` and print the reply status.
pub fn submit(actions: &Actions, password: &str, out: &mut dyn Write) -> Result<GateReply> {
    if password.is_empty() {
        bail!("Password cannot be empty.");
    }

    let reply = actions
        .block_on(actions.api().submit_password(password))
        .context("Failed to submit password")?;

    writeln!(out, "{}", describe(&reply))?;
    Ok(reply)
}

/// One-line summary of a gate reply.
pub fn describe(reply: &GateReply) -> String {
    if reply.reason.is_empty() {
        format!("Response [{}]", reply.status)
    } else {
        format!("Response [{} {}]", reply.status, reply.reason)
    }
}
