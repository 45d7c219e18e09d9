//! The read-eval-print loop.
//!
//! Reads one command per line, prints one reply per command, and saves the
//! book when the session ends (`close`, `exit` or end of input).

use crate::commands::{CommandContext, CommandTable, Dispatcher};
use crate::models::AddressBook;
use crate::repositories::BookStore;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

/// An interactive session over a book and its store.
pub struct Session<'a> {
    dispatcher: Dispatcher<'a>,
    store: &'a dyn BookStore,
    prompt: String,
}

impl<'a> Session<'a> {
    /// Create a session dispatching through `table` and saving to `store`.
    pub fn new(table: &'a CommandTable, store: &'a dyn BookStore, prompt: impl Into<String>) -> Self {
        Self {
            dispatcher: Dispatcher::new(table),
            store,
            prompt: prompt.into(),
        }
    }

    /// Run until an exit command or end of input, then save `book`.
    ///
    /// `today` is asked for the current date before every command. Input
    /// that is not valid UTF-8 is decoded lossily and dispatched like any
    /// other line. The book is saved however the loop ends; a failed save
    /// is reported on `output`, and an I/O error on `input` or `output` is
    /// returned after the save.
    pub fn run<R, W, T>(
        &self,
        book: &mut AddressBook,
        input: R,
        mut output: W,
        today: T,
    ) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        T: Fn() -> NaiveDate,
    {
        let outcome = self.serve(book, input, &mut output, today);
        if let Err(e) = &outcome {
            error!(error = %e, "Session I/O failed");
        }

        if let Err(e) = self.store.save(book) {
            error!(error = %e, "Final save failed");
            writeln!(output, "Unexpected error: {}", e)?;
        }
        outcome
    }

    /// The prompt/read/dispatch loop, without the final save.
    fn serve<R, W, T>(
        &self,
        book: &mut AddressBook,
        mut input: R,
        output: &mut W,
        today: T,
    ) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        T: Fn() -> NaiveDate,
    {
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("End of input");
                writeln!(output)?;
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            let mut ctx = CommandContext {
                book: &mut *book,
                store: self.store,
                today: today(),
            };
            let reply = self.dispatcher.dispatch(&line, &mut ctx);
            writeln!(output, "{}", reply.text)?;

            if reply.exit {
                return Ok(());
            }
        }
    }
}
