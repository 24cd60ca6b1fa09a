//! Line-oriented command parsing for the interactive loop.
//!
//! # Responsibility
//! - Map one input line onto one session action.
//! - Convert user-facing one-based task numbers to zero-based indices.

use std::fmt::{Display, Formatter};

/// One parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line; ignored by the loop.
    Nothing,
    /// `add <text>`: append a task to the current group.
    Add(String),
    /// `list`: re-render the current group.
    List,
    /// `toggle <n>`: flip completion of task n.
    Toggle(usize),
    /// `edit <n> <text>`: replace text of task n.
    Edit(usize, String),
    /// `rm <n>`: delete task n.
    Remove(usize),
    /// `groups`: render the group selector.
    Groups,
    /// `group add <name>`: create a group and switch to it.
    GroupAdd(String),
    /// `group rm`: delete the current group.
    GroupRemove,
    /// `group use <name>`: switch the current group.
    GroupUse(String),
    /// `help`: print command reference.
    Help,
    /// `quit` / `exit`: leave the loop.
    Quit,
}

/// Errors from parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidTaskNumber(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(word) => {
                write!(f, "unknown command `{word}`; type `help` for the list")
            }
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::InvalidTaskNumber(value) => {
                write!(f, "`{value}` is not a valid task number (expected 1, 2, ...)")
            }
        }
    }
}

/// Command reference printed by `help`.
pub const HELP_TEXT: &str = "\
commands:
  add <text>         add a task to the current group
  list               show the current group's tasks
  toggle <n>         flip completion of task n
  edit <n> <text>    replace the text of task n
  rm <n>             delete task n
  groups             show all groups
  group add <name>   create a group and switch to it
  group rm           delete the current group
  group use <name>   switch to another group
  help               show this reference
  quit               exit";

/// Parses one input line into a [`Command`].
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }

    let (word, rest) = split_word(line);
    match word {
        "add" => Ok(Command::Add(require_text(rest, "task text")?)),
        "list" => Ok(Command::List),
        "toggle" => Ok(Command::Toggle(parse_task_number(rest)?)),
        "rm" => Ok(Command::Remove(parse_task_number(rest)?)),
        "edit" => {
            let (number, text) = split_word(rest);
            if number.is_empty() {
                return Err(ParseError::MissingArgument("task number"));
            }
            let index = task_number_to_index(number)?;
            Ok(Command::Edit(index, require_text(text, "new task text")?))
        }
        "groups" => Ok(Command::Groups),
        "group" => parse_group(rest),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_group(rest: &str) -> Result<Command, ParseError> {
    let (word, rest) = split_word(rest);
    match word {
        "add" => Ok(Command::GroupAdd(require_text(rest, "group name")?)),
        "rm" => Ok(Command::GroupRemove),
        "use" => Ok(Command::GroupUse(require_text(rest, "group name")?)),
        "" => Err(ParseError::MissingArgument("group subcommand (add/rm/use)")),
        other => Err(ParseError::UnknownCommand(format!("group {other}"))),
    }
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    }
}

fn require_text(value: &str, what: &'static str) -> Result<String, ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MissingArgument(what));
    }
    Ok(trimmed.to_string())
}

fn parse_task_number(value: &str) -> Result<usize, ParseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ParseError::MissingArgument("task number"));
    }
    task_number_to_index(trimmed)
}

fn task_number_to_index(value: &str) -> Result<usize, ParseError> {
    match value.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(number - 1),
        _ => Err(ParseError::InvalidTaskNumber(value.to_string())),
    }
}
