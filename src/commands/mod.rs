//! Text commands understood by the contact book.
//!
//! A line of user input is tokenized on whitespace. The first token is the
//! verb (case-insensitive); the rest are arguments. Multi-word names are
//! supported wherever the name is followed by a fixed number of trailing
//! arguments, e.g. `add John Doe 1112223333`.

mod handlers;

pub use handlers::{CommandHandler, Outcome};

use crate::error::{CommandError, CommandResult};

/// Usage strings shown when arguments are missing.
pub mod usage {
    pub const ADD: &str = "add <name> <phone>";
    pub const CHANGE: &str = "change <name> <old phone> <new phone>";
    pub const PHONE: &str = "phone <name>";
    pub const SHOW: &str = "show all";
    pub const SEARCH: &str = "search <query>";
    pub const DELETE: &str = "delete <name>";
    pub const BIRTHDAY: &str = "birthday <name> <YYYY-MM-DD>";
    pub const DAYS: &str = "days <name>";
    pub const UPCOMING: &str = "upcoming <days>";
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    ShowAll,
    Search { query: String },
    Delete { name: String },
    Birthday { name: String, date: String },
    Days { name: String },
    Upcoming { days: i64 },
    Exit,
}

impl Command {
    /// Parse one line of input.
    ///
    /// # Errors
    ///
    /// - `CommandError::Unknown` for an empty line or unrecognized verb.
    /// - `CommandError::MissingArguments` when a verb lacks arguments.
    /// - `CommandError::InvalidArgument` when `upcoming` is not given a number.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut tokens = line.split_whitespace();
        let verb = tokens
            .next()
            .ok_or_else(|| CommandError::Unknown(String::new()))?
            .to_lowercase();
        let args: Vec<&str> = tokens.collect();

        match verb.as_str() {
            "hello" | "hi" => Ok(Command::Hello),
            "help" => Ok(Command::Help),
            "exit" | "close" | "good" => Ok(Command::Exit),
            "add" => {
                let (name, rest) = split_trailing(&args, 1, usage::ADD)?;
                Ok(Command::Add {
                    name,
                    phone: rest[0].to_string(),
                })
            }
            "change" => {
                let (name, rest) = split_trailing(&args, 2, usage::CHANGE)?;
                Ok(Command::Change {
                    name,
                    old: rest[0].to_string(),
                    new: rest[1].to_string(),
                })
            }
            "birthday" => {
                let (name, rest) = split_trailing(&args, 1, usage::BIRTHDAY)?;
                Ok(Command::Birthday {
                    name,
                    date: rest[0].to_string(),
                })
            }
            "phone" => Ok(Command::Phone {
                name: join_required(&args, usage::PHONE)?,
            }),
            "delete" => Ok(Command::Delete {
                name: join_required(&args, usage::DELETE)?,
            }),
            "days" => Ok(Command::Days {
                name: join_required(&args, usage::DAYS)?,
            }),
            "search" => Ok(Command::Search {
                query: join_required(&args, usage::SEARCH)?,
            }),
            "show" => match args.first() {
                Some(arg) if arg.eq_ignore_ascii_case("all") => Ok(Command::ShowAll),
                Some(_) => Err(CommandError::Unknown(line.trim().to_string())),
                None => Err(CommandError::MissingArguments(usage::SHOW)),
            },
            "upcoming" => {
                let raw = args
                    .first()
                    .ok_or(CommandError::MissingArguments(usage::UPCOMING))?;
                let days = raw
                    .parse::<i64>()
                    .ok()
                    .filter(|days| *days >= 0)
                    .ok_or_else(|| {
                        CommandError::InvalidArgument(format!(
                            "{} is not a number of days",
                            raw
                        ))
                    })?;
                Ok(Command::Upcoming { days })
            }
            _ => Err(CommandError::Unknown(verb)),
        }
    }
}

/// Split `args` into a leading name and `trailing` fixed arguments.
fn split_trailing<'a>(
    args: &[&'a str],
    trailing: usize,
    usage: &'static str,
) -> CommandResult<(String, Vec<&'a str>)> {
    if args.len() <= trailing {
        return Err(CommandError::MissingArguments(usage));
    }
    let (name, rest) = args.split_at(args.len() - trailing);
    Ok((name.join(" "), rest.to_vec()))
}

fn join_required(args: &[&str], usage: &'static str) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::MissingArguments(usage));
    }
    Ok(args.join(" "))
}
