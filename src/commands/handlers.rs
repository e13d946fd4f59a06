//! Executes parsed commands against an address book.

use super::Command;
use crate::book::AddressBook;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult, RecordResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};

const HELP_TEXT: &str = "\
Available commands:
  hello
  add <name> <phone>
  change <name> <old phone> <new phone>
  phone <name>
  show all
  search <query>
  delete <name>
  birthday <name> <YYYY-MM-DD>
  days <name>
  upcoming <days>
  exit | close | good bye";

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the message and keep reading commands.
    Continue(String),
    /// Print the message and stop.
    Exit(String),
}

impl Outcome {
    /// The text to show the user.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(message) | Outcome::Exit(message) => message,
        }
    }

    /// Whether the session should end.
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// Turns commands into address book operations and text replies.
#[derive(Debug, Clone)]
pub struct CommandHandler {
    page_size: usize,
    today: Option<NaiveDate>,
}

impl CommandHandler {
    /// Create a handler that lists contacts `page_size` at a time.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            today: None,
        }
    }

    /// Fix the date used for birthday calculations instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parse and run one line of input. Failures become the reply text.
    ///
    /// Blank lines produce an empty reply.
    pub fn handle_line(&self, book: &mut AddressBook, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Continue(String::new());
        }

        match Command::parse(line).and_then(|command| self.execute(book, command)) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!("Command failed: {:?}", e);
                Outcome::Continue(e.to_string())
            }
        }
    }

    /// Run a parsed command.
    ///
    /// # Errors
    ///
    /// - `CommandError::ContactNotFound` when the named contact does not exist.
    /// - `CommandError::Record` when the record rejects the change.
    pub fn execute(&self, book: &mut AddressBook, command: Command) -> CommandResult<Outcome> {
        let reply = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => HELP_TEXT.to_string(),
            Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
            Command::Add { name, phone } => Self::add(book, name, &phone)?,
            Command::Change { name, old, new } => {
                update(book, &name, |record| record.edit_phone(&old, &new))?;
                "Phone updated.".to_string()
            }
            Command::Phone { name } => {
                let record = find(book, &name)?;
                if record.phones().is_empty() {
                    format!("Contact {} has no phones.", name)
                } else {
                    format!("Phone number for {}: {}", name, join_phones(record))
                }
            }
            Command::ShowAll => self.show_all(book),
            Command::Search { query } => {
                let found = book.search(&query);
                if found.is_empty() {
                    format!("No contacts match {}.", query)
                } else {
                    lines(found)
                }
            }
            Command::Delete { name } => {
                if !book.delete(&name) {
                    return Err(CommandError::ContactNotFound(name));
                }
                format!("Contact {} deleted.", name)
            }
            Command::Birthday { name, date } => {
                update(book, &name, |record| record.set_birthday(&date))?;
                "Birthday set.".to_string()
            }
            Command::Days { name } => {
                match find(book, &name)?.days_to_birthday_from(self.today()) {
                    None => format!("Contact {} has no birthday set.", name),
                    Some(0) => format!("{}'s birthday is today!", name),
                    Some(1) => format!("{}'s birthday is tomorrow.", name),
                    Some(days) => format!("{} days until {}'s birthday.", days, name),
                }
            }
            Command::Upcoming { days } => self.upcoming(book, days),
        };
        Ok(Outcome::Continue(reply))
    }

    fn add(book: &mut AddressBook, name: String, phone: &str) -> CommandResult<String> {
        if let Some(added) = book.update(&name, |record| record.add_phone(phone)) {
            added?;
            return Ok(format!("Phone added to {}.", name));
        }

        let mut record = Record::from_name(name);
        record.add_phone(phone)?;
        book.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn show_all(&self, book: &AddressBook) -> String {
        if book.is_empty() {
            return "No contacts available.".to_string();
        }

        let pages = book.iterate(self.page_size);
        if pages.len() == 1 {
            return lines(book.records());
        }

        pages
            .enumerate()
            .map(|(index, page)| format!("Page {}:\n{}", index + 1, lines(page.iter())))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn upcoming(&self, book: &AddressBook, days: i64) -> String {
        let upcoming = book.upcoming_birthdays(days, self.today());
        if upcoming.is_empty() {
            return format!("No birthdays in the next {} days.", days);
        }

        upcoming
            .into_iter()
            .map(|(record, in_days)| match in_days {
                0 => format!("{}: today", record.name()),
                1 => format!("{}: tomorrow", record.name()),
                n => format!("{}: in {} days", record.name(), n),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn find<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn update<T>(
    book: &mut AddressBook,
    name: &str,
    edit: impl FnOnce(&mut Record) -> RecordResult<T>,
) -> CommandResult<T> {
    let result = book
        .update(name, edit)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    Ok(result?)
}

fn join_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

fn lines<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> CommandHandler {
        CommandHandler::new(2).with_today(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    #[test]
    fn test_add_then_phone() {
        let handler = handler();
        let mut book = AddressBook::new();

        let outcome = handler.handle_line(&mut book, "add John 1112223333");
        assert_eq!(outcome.message(), "Contact added.");

        let outcome = handler.handle_line(&mut book, "add John 4445556666");
        assert_eq!(outcome.message(), "Phone added to John.");

        let outcome = handler.handle_line(&mut book, "phone John");
        assert_eq!(
            outcome.message(),
            "Phone number for John: 1112223333; 4445556666"
        );
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let handler = handler();
        let mut book = AddressBook::new();

        let outcome = handler.handle_line(&mut book, "add John 12345");
        assert!(outcome.message().starts_with("Invalid phone number: 12345"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_unknown_contact() {
        let handler = handler();
        let mut book = AddressBook::new();
        let result = handler.execute(
            &mut book,
            Command::Phone {
                name: "Nobody".to_string(),
            },
        );
        assert_eq!(result, Err(CommandError::ContactNotFound("Nobody".into())));
    }

    #[test]
    fn test_show_all_empty_and_single_page() {
        let handler = handler();
        let mut book = AddressBook::new();
        assert_eq!(
            handler.handle_line(&mut book, "show all").message(),
            "No contacts available."
        );

        handler.handle_line(&mut book, "add John 1112223333");
        assert_eq!(
            handler.handle_line(&mut book, "show all").message(),
            "Contact name: John, phones: 1112223333"
        );
    }

    #[test]
    fn test_days_today() {
        let handler = handler();
        let mut book = AddressBook::new();
        handler.handle_line(&mut book, "add John 1112223333");
        handler.handle_line(&mut book, "birthday John 1990-10-14");
        assert_eq!(
            handler.handle_line(&mut book, "days John").message(),
            "John's birthday is today!"
        );
    }

    #[test]
    fn test_days_tomorrow() {
        let handler = handler();
        let mut book = AddressBook::new();
        handler.handle_line(&mut book, "add John 1112223333");
        handler.handle_line(&mut book, "birthday John 1990-10-15");
        assert_eq!(
            handler.handle_line(&mut book, "days John").message(),
            "John's birthday is tomorrow."
        );
    }

    #[test]
    fn test_exit() {
        let handler = handler();
        let mut book = AddressBook::new();
        let outcome = handler.handle_line(&mut book, "good bye");
        assert!(outcome.is_exit());
        assert_eq!(outcome.message(), "Good bye!");
    }

    #[test]
    fn test_blank_line() {
        let handler = handler();
        let mut book = AddressBook::new();
        assert_eq!(
            handler.handle_line(&mut book, "   "),
            Outcome::Continue(String::new())
        );
    }
}
