//! Interactive read-eval-print loop for the contact book.
//!
//! A [`Session`] loads the book once, feeds each input line to a
//! [`CommandHandler`], and saves the book when the loop ends.

use crate::book::AddressBook;
use crate::commands::{CommandHandler, Outcome};
use crate::config::Config;
use crate::error::CommandError;
use crate::repositories::{BookRepository, JsonFileRepository, LegacyTextImporter};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">> ";

/// One run of the contact book against a repository.
pub struct Session<'a, R: BookRepository> {
    repository: &'a R,
    handler: CommandHandler,
    seed: Option<LegacyTextImporter>,
}

impl<'a, R: BookRepository> Session<'a, R> {
    /// Create a session that loads from and saves to `repository`.
    pub fn new(repository: &'a R, handler: CommandHandler) -> Self {
        Self {
            repository,
            handler,
            seed: None,
        }
    }

    /// Start from a legacy text file instead of the repository's contents.
    pub fn seeded_from(mut self, importer: LegacyTextImporter) -> Self {
        self.seed = Some(importer);
        self
    }

    fn open_book(&self) -> Result<AddressBook> {
        match &self.seed {
            Some(importer) => importer.import().context("Failed to import legacy contacts"),
            None => self
                .repository
                .load()
                .context("Failed to load address book"),
        }
    }

    /// Read commands from `input` until an exit command or end of input,
    /// then save the book.
    ///
    /// The book is saved even when reading the terminal fails.
    ///
    /// # Errors
    ///
    /// Fails if the book cannot be loaded or saved, or on terminal I/O errors.
    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut book = self.open_book()?;
        tracing::info!("Session started with {} contacts", book.len());

        let looped = run_loop(&self.handler, &mut book, input, &mut output);

        self.repository
            .save(&book)
            .context("Failed to save address book")?;
        tracing::info!("Session ended with {} contacts", book.len());

        looped.context("Terminal I/O failed")
    }
}

/// Prompt, read, and answer lines until an exit command or end of input.
pub fn run_loop(
    handler: &CommandHandler,
    book: &mut AddressBook,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let outcome = match lines.next() {
            None => {
                writeln!(output)?;
                return Ok(());
            }
            Some(Ok(line)) => handler.handle_line(book, &line),
            // The undecodable line is consumed, so reading can go on.
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!("Ignoring input line: {}", e);
                Outcome::Continue(CommandError::Unknown(String::new()).to_string())
            }
            Some(Err(e)) => return Err(e),
        };

        if !outcome.message().is_empty() {
            writeln!(output, "{}", outcome.message())?;
        }
        if outcome.is_exit() {
            return Ok(());
        }
    }
}

/// Run the contact book on the terminal with the given configuration.
pub fn run(config: &Config) -> Result<()> {
    let repository = JsonFileRepository::new(&config.book_path);
    let mut session = Session::new(&repository, CommandHandler::new(config.page_size));

    if let Some(legacy) = &config.legacy_import_path {
        if !config.book_path.exists() {
            tracing::info!("Importing legacy contacts from {}", legacy.display());
            session = session.seeded_from(LegacyTextImporter::new(legacy));
        }
    }

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())
}
