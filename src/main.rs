//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive session on stdin/stdout and
//! saves the book when the session ends.

use anyhow::{Context, Result};
use contact_book::{BookStore, CommandTable, Config, JsonFileStore, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr; stdout belongs to the session
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = JsonFileStore::new(config.book_path.clone());
    let mut book = match store.load() {
        Ok(book) => book.unwrap_or_default(),
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e).context("Refusing to start with an unreadable address book");
        }
    };

    info!(
        "Starting contact book with {} contacts from {}",
        book.len(),
        config.book_path.display()
    );

    let table = CommandTable::new();
    let session = Session::new(&table, &store, config.prompt.as_str());

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(&mut book, stdin.lock(), stdout.lock(), || {
        chrono::Local::now().date_naive()
    })?;

    info!("Contact book session ended");
    Ok(())
}
