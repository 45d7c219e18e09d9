//! Command dispatch for the interactive session.
//!
//! - **parser**: split an input line into command and arguments
//! - **handlers**: one function per command
//! - [`CommandTable`]: the fixed mapping from command name to handler
//! - [`Dispatcher`]: runs a line against the table and turns every error
//!   into a reply, so no command can end the session by failing

pub mod handlers;
pub mod parser;

pub use parser::parse_input;

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use crate::repositories::BookStore;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, error, warn};

/// Everything a handler may touch.
pub struct CommandContext<'a> {
    /// The session's address book
    pub book: &'a mut AddressBook,
    /// Where `save` and `load` go
    pub store: &'a dyn BookStore,
    /// The date the birthday report is computed for
    pub today: NaiveDate,
}

/// Signature shared by all command handlers.
pub type Handler = fn(&[&str], &mut CommandContext<'_>) -> CommandResult<String>;

/// A registered command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub handler: Handler,
    /// Whether the session ends after this command
    pub exits: bool,
}

/// Mapping from command name to handler, built once per process.
pub struct CommandTable {
    commands: HashMap<&'static str, CommandSpec>,
}

impl CommandTable {
    /// The standard command set.
    pub fn new() -> Self {
        let entries: [(&'static str, Handler, bool); 12] = [
            ("hello", handlers::hello, false),
            ("add", handlers::add, false),
            ("change", handlers::change, false),
            ("phone", handlers::phone, false),
            ("all", handlers::all, false),
            ("add-birthday", handlers::add_birthday, false),
            ("show-birthday", handlers::show_birthday, false),
            ("birthdays", handlers::birthdays, false),
            ("save", handlers::save, false),
            ("load", handlers::load, false),
            ("close", handlers::exit, true),
            ("exit", handlers::exit, true),
        ];

        let commands = entries
            .into_iter()
            .map(|(name, handler, exits)| (name, CommandSpec { handler, exits }))
            .collect();

        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to show the user
    pub text: String,
    /// The session should end
    pub exit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

/// Runs input lines against a [`CommandTable`].
pub struct Dispatcher<'t> {
    table: &'t CommandTable,
}

impl<'t> Dispatcher<'t> {
    pub fn new(table: &'t CommandTable) -> Self {
        Self { table }
    }

    /// Parse `line`, run the matching handler and render the outcome.
    pub fn dispatch(&self, line: &str, ctx: &mut CommandContext<'_>) -> Reply {
        let (command, args) = parse_input(line);

        let Some(spec) = self.table.get(command) else {
            warn!(command, "Unknown command");
            return Reply::say(format!("Unknown command: {}", command));
        };

        debug!(command, args = args.len(), "Dispatching command");
        match (spec.handler)(&args, ctx) {
            Ok(text) => Reply {
                text,
                exit: spec.exits,
            },
            Err(e) => Reply::say(Self::render_error(command, &e)),
        }
    }

    /// User-facing text for a handler error.
    fn render_error(command: &str, err: &CommandError) -> String {
        match err {
            CommandError::Validation(e) => {
                debug!(command, value = e.value(), "Validation failed");
                e.to_string()
            }
            CommandError::NotFound(name) => {
                debug!(command, contact = %name, "Contact not found");
                "Contact not found.".to_string()
            }
            CommandError::Arity { .. } | CommandError::NoPhones(_) => err.to_string(),
            CommandError::Storage(e) => {
                error!(command, error = %e, "Storage failure");
                format!("Unexpected error: {}", e)
            }
        }
    }
}
