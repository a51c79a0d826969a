//! Interactive shopping session
//!
//! A session owns one [`Store`] for its whole lifetime and reads commands one
//! line at a time. Store errors are reported and the session keeps going;
//! only `quit`, `exit` or end of input stop it.

use std::io::{BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

use crate::core::{Item, Store};
use crate::output::{
    CartResult, CheckoutResult, ItemInfo, ItemListResult, OperationResult, OutputMode, Render,
};

/// Command summary printed by `help`
pub const HELP: &str = "\
Commands:
  items | list        show the whole catalog
  search <text>       find items whose name contains <text>
  tag <hashtag>       find items tagged exactly <hashtag>
  add <text>          add the one item whose name contains <text>
  remove <text>       remove the one cart item whose name contains <text>
  cart                show the cart and its subtotal
  checkout            show the total for the cart
  help                show this message
  quit | exit         leave the session";

/// Errors from parsing a session command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// First word is not a known command
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// Command needs an argument and none was given
    #[error("'{command}' needs an argument")]
    MissingArgument {
        /// The command that was missing its argument
        command: &'static str,
    },
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the catalog
    Items,
    /// Search by name substring
    Search(String),
    /// Search by exact tag
    Tag(String),
    /// Add by name substring
    Add(String),
    /// Remove by name substring
    Remove(String),
    /// Show the cart
    Cart,
    /// Show the checkout total
    Checkout,
    /// Show help
    Help,
    /// End the session
    Quit,
}

impl ShellCommand {
    /// Parse one input line
    ///
    /// Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for ShellCommand {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();

        let arg = |command: &'static str| {
            if rest.is_empty() {
                Err(SessionError::MissingArgument { command })
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_lowercase().as_str() {
            "items" | "list" => Ok(Self::Items),
            "search" => arg("search").map(Self::Search),
            "tag" => arg("tag").map(|tag| Self::Tag(tag.trim_start_matches('#').to_string())),
            "add" => arg("add").map(Self::Add),
            "remove" | "rm" => arg("remove").map(Self::Remove),
            "cart" => Ok(Self::Cart),
            "checkout" => Ok(Self::Checkout),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(SessionError::UnknownCommand(word.to_string())),
        }
    }
}

/// What a command produced
#[derive(Debug)]
pub enum Reply {
    /// Catalog listing or search results
    List(ItemListResult),
    /// Cart contents
    Cart(CartResult),
    /// Checkout total
    Checkout(CheckoutResult),
    /// Add/remove confirmation or a reported error
    Operation(OperationResult),
    /// Help text
    Help,
    /// Session is over
    Quit,
}

impl Reply {
    /// Write the reply in the given mode
    pub fn write_to(&self, mode: OutputMode, out: &mut dyn Write) -> std::io::Result<()> {
        match self {
            Self::List(result) => result.write_to(mode, out),
            Self::Cart(result) => result.write_to(mode, out),
            Self::Checkout(result) => result.write_to(mode, out),
            Self::Operation(result) => result.write_to(mode, out),
            Self::Help => match mode {
                OutputMode::Human => writeln!(out, "{HELP}"),
                OutputMode::Json => OperationResult::ok(HELP).write_to(mode, out),
            },
            Self::Quit => Ok(()),
        }
    }

    /// Whether this reply reports a failure
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Operation(OperationResult { success: false, .. }))
    }
}

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands executed (parse failures included)
    pub commands: usize,
    /// Commands that reported an error
    pub errors: usize,
}

/// A shopping session over one store
#[derive(Debug)]
pub struct Session {
    store: Store,
    mode: OutputMode,
    prompt: String,
}

impl Session {
    /// Start a session without a prompt
    #[must_use]
    pub const fn new(store: Store, mode: OutputMode) -> Self {
        Self {
            store,
            mode,
            prompt: String::new(),
        }
    }

    /// Show `prompt` before reading each line (human mode only)
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The store this session operates on
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Run one command against the store
    pub fn execute(&mut self, command: ShellCommand) -> Reply {
        match command {
            ShellCommand::Items => list(self.store.get_items()),
            ShellCommand::Search(text) => list(&self.store.search_by_name(&text)),
            ShellCommand::Tag(tag) => list(&self.store.search_by_hashtag(&tag)),
            ShellCommand::Add(text) => match self.store.add_item(&text) {
                Ok(item) => Reply::Operation(OperationResult::ok(format!("Added: {}", item.name))),
                Err(e) => Reply::Operation(OperationResult::failed(e.to_string())),
            },
            ShellCommand::Remove(text) => match self.store.remove_item(&text) {
                Ok(item) => {
                    Reply::Operation(OperationResult::ok(format!("Removed: {}", item.name)))
                },
                Err(e) => Reply::Operation(OperationResult::failed(e.to_string())),
            },
            ShellCommand::Cart => Reply::Cart(CartResult::from(self.store.cart())),
            ShellCommand::Checkout => Reply::Checkout(CheckoutResult {
                items: ItemInfo::from_items(&self.store.cart().sorted_items()),
                total: self.store.checkout(),
            }),
            ShellCommand::Help => Reply::Help,
            ShellCommand::Quit => Reply::Quit,
        }
    }

    /// Parse and run one input line
    ///
    /// Returns `None` for blank and comment lines.
    pub fn execute_line(&mut self, line: &str) -> Option<Reply> {
        match ShellCommand::parse_line(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(e) => Some(Reply::Operation(OperationResult::failed(e.to_string()))),
        }
    }

    /// Read commands from `input` until `quit` or end of input
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        out: &mut dyn Write,
    ) -> anyhow::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut lines = input.lines();

        loop {
            self.write_prompt(out)?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            let Some(reply) = self.execute_line(&line) else {
                continue;
            };
            summary.commands += 1;
            if reply.is_error() {
                summary.errors += 1;
            }
            reply.write_to(self.mode, out)?;
            if matches!(reply, Reply::Quit) {
                break;
            }
        }

        log::debug!(
            "Session finished: {} command(s), {} error(s)",
            summary.commands,
            summary.errors
        );
        Ok(summary)
    }

    fn write_prompt(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.mode == OutputMode::Human && !self.prompt.is_empty() {
            write!(out, "{}", self.prompt)?;
            out.flush()?;
        }
        Ok(())
    }
}

fn list(items: &[Rc<Item>]) -> Reply {
    Reply::List(ItemListResult::new(ItemInfo::from_items(items)))
}
