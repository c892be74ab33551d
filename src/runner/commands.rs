//! Parsing of driver action lines into [`Command`]s.

use thiserror::Error;

use crate::app::types::{Category, TodoIcon, TodoId, UnknownName};

/// One user action forwarded to the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        task: String,
        category: Option<Category>,
        icon: Option<TodoIcon>,
    },
    Random,
    Remove(TodoId),
    Edit(TodoId),
    /// Replace the task text of the item being edited.
    Set(String),
    SetCategory(Category),
    SetIcon(TodoIcon),
    /// Commit new text against an explicit item id.
    Change { id: TodoId, task: String },
    Done,
    /// Remove the item being edited.
    Delete,
    List,
    Help,
    Quit,
}

impl Command {
    /// True for actions that can change the manager state.
    pub fn mutates(&self) -> bool {
        !matches!(self, Command::List | Command::Help | Command::Quit)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("invalid item id `{0}`")]
    InvalidId(String),

    #[error("task text must not be blank")]
    BlankTask,

    #[error(transparent)]
    UnknownName(#[from] UnknownName),
}

pub const HELP: &str = "\
commands:
  add [-c CATEGORY] [-i ICON] TEXT   append a new item
  random                            append a random sample item
  remove ID                         remove an item
  edit ID                           select an item for editing
  set TEXT                          change the text of the item being edited
  category CATEGORY                 change the category of the item being edited
  icon ICON                         change the icon of the item being edited
  change ID TEXT                    commit new text for item ID (must be the one being edited)
  delete                            remove the item being edited
  done                              finish editing
  list                              print the list
  help                              show this help
  quit                              stop reading commands
";

/// Parse one input line. Returns `Ok(None)` for blank lines and `#`
/// comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let cmd = match word.to_ascii_lowercase().as_str() {
        "add" => parse_add(rest)?,
        "random" => Command::Random,
        "remove" | "rm" => Command::Remove(parse_id("remove", rest)?),
        "edit" => Command::Edit(parse_id("edit", rest)?),
        "set" => Command::Set(non_blank(rest)?),
        "category" => Command::SetCategory(required("category", "a category name", rest)?.parse()?),
        "icon" => Command::SetIcon(required("icon", "an icon name", rest)?.parse()?),
        "change" => {
            let (id, task) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Command::Change {
                id: parse_id("change", id)?,
                task: non_blank(task)?,
            }
        }
        "done" => Command::Done,
        "delete" => Command::Delete,
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(cmd))
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let mut category = None;
    let mut icon = None;
    let mut words = rest.split_whitespace().peekable();
    while let Some(flag) = words.peek().copied() {
        match flag {
            "-c" | "--category" => {
                words.next();
                let name = words.next().ok_or(CommandError::MissingArgument {
                    command: "add",
                    what: "a category after --category",
                })?;
                category = Some(name.parse()?);
            }
            "-i" | "--icon" => {
                words.next();
                let name = words.next().ok_or(CommandError::MissingArgument {
                    command: "add",
                    what: "an icon after --icon",
                })?;
                icon = Some(name.parse()?);
            }
            _ => break,
        }
    }
    let task = words.collect::<Vec<_>>().join(" ");
    Ok(Command::Add {
        task: non_blank(&task)?,
        category,
        icon,
    })
}

fn required<'a>(
    command: &'static str,
    what: &'static str,
    rest: &'a str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, what })
    } else {
        Ok(rest)
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<TodoId, CommandError> {
    let raw = required(command, "an item id", rest.trim())?;
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

fn non_blank(text: &str) -> Result<String, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        Err(CommandError::BlankTask)
    } else {
        Ok(text.to_string())
    }
}
