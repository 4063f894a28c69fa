//! actions
//!
//! Terminal actions of the console and the command tree that reaches them.
//!
//! # Commands
//!
//! | Phrase          | Action                                   |
//! |-----------------|------------------------------------------|
//! | `show contacts` | unique contacts as a table               |
//! | `show sms`      | text messages as a table                 |
//! | `show logs`     | call log as a table                      |
//! | `show help`     | entries of the YAML help file            |
//! | `make image`    | ask the device to build an image         |
//!
//! # Execution
//!
//! Service calls are async; [`Actions`] owns a current-thread tokio runtime
//! and blocks on each call, so an action finishes before the next prompt.

use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::core::tree::{CommandTree, TreeError};
use crate::help;
use crate::remote::{Contact, DeviceApi};
use crate::ui::output::{self, Verbosity};
use crate::ui::spinner::Spinner;
use crate::ui::table;

/// Identifies a terminal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    ShowContacts,
    ShowSms,
    ShowHelp,
    ShowLogs,
    MakeImage,
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionId::ShowContacts => "show-contacts",
            ActionId::ShowSms => "show-sms",
            ActionId::ShowHelp => "show-help",
            ActionId::ShowLogs => "show-logs",
            ActionId::MakeImage => "make-image",
        };
        f.write_str(name)
    }
}

/// The console's command tree.
pub fn command_tree() -> Result<CommandTree<ActionId>, TreeError> {
    CommandTree::builder()
        .namespace("show", |ns| {
            ns.action("contacts", ActionId::ShowContacts)
                .action("sms", ActionId::ShowSms)
                .action("help", ActionId::ShowHelp)
                .action("logs", ActionId::ShowLogs)
        })
        .namespace("make", |ns| ns.action("image", ActionId::MakeImage))
        .build()
}

/// Keep the first occurrence of each (name, number) pair.
pub fn unique_contacts(contacts: Vec<Contact>) -> Vec<Contact> {
    let mut seen = HashSet::new();
    contacts
        .into_iter()
        .filter(|c| seen.insert((c.name.clone(), c.number.clone())))
        .collect()
}

/// Runs actions against the device service.
pub struct Actions {
    api: Arc<dyn DeviceApi>,
    runtime: tokio::runtime::Runtime,
    help_file: PathBuf,
    verbosity: Verbosity,
}

impl Actions {
    /// Create an executor with its own single-threaded runtime.
    pub fn new(api: Arc<dyn DeviceApi>, help_file: PathBuf, verbosity: Verbosity) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        Ok(Self {
            api,
            runtime,
            help_file,
            verbosity,
        })
    }

    /// The device service this executor talks to.
    pub fn api(&self) -> &dyn DeviceApi {
        self.api.as_ref()
    }

    /// Drive a future to completion on the executor's runtime.
    ///
    /// Must not be called from inside another tokio runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Run one action, writing its output to `out`.
    pub fn run(&self, action: ActionId, out: &mut dyn Write) -> Result<()> {
        output::debug(format!("running action {}", action), self.verbosity);

        match action {
            ActionId::ShowContacts => self.show_contacts(out),
            ActionId::ShowSms => self.show_sms(out),
            ActionId::ShowHelp => self.show_help(out),
            ActionId::ShowLogs => self.show_logs(out),
            ActionId::MakeImage => self.make_image(out),
        }
    }

    fn show_contacts(&self, out: &mut dyn Write) -> Result<()> {
        let contacts = self
            .block_on(self.api.contacts())
            .context("Failed to fetch contacts")?;
        let contacts = unique_contacts(contacts);
        writeln!(out, "{}", table::contacts(&contacts))?;
        Ok(())
    }

    fn show_sms(&self, out: &mut dyn Write) -> Result<()> {
        let messages = self
            .block_on(self.api.sms())
            .context("Failed to fetch text messages")?;
        writeln!(out, "{}", table::sms(&messages))?;
        Ok(())
    }

    fn show_logs(&self, out: &mut dyn Write) -> Result<()> {
        let logs = self
            .block_on(self.api.call_logs())
            .context("Failed to fetch call logs")?;
        writeln!(out, "{}", table::call_logs(&logs))?;
        Ok(())
    }

    fn show_help(&self, out: &mut dyn Write) -> Result<()> {
        let entries = help::load(&self.help_file)?;
        for entry in entries {
            writeln!(out, "{}", entry.line())?;
        }
        Ok(())
    }

    fn make_image(&self, out: &mut dyn Write) -> Result<()> {
        let spinner = Spinner::start("Creating Image", self.verbosity.shows_progress());
        let reply = self.block_on(self.api.make_image());
        spinner.finish();

        let reply = reply.context("Failed to create image")?;
        writeln!(out)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&reply)?)?;
        Ok(())
    }
}
