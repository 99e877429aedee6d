//! Shell command parser
//!
//! Parses lines like "add milk -q 2", "select 3", "edit -p 2 -d whole grain".

use speedlist_core::domain::entities::{ItemFields, DEFAULT_PRIORITY, DEFAULT_QUANTITY};
use thiserror::Error;

/// Parse error for shell input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Field overrides given with `-n`, `-q`, `-p` and `-d`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub item: Option<String>,
    pub quantity: Option<i32>,
    pub priority: Option<i32>,
    pub details: Option<String>,
}

impl FieldPatch {
    pub fn is_empty(&self) -> bool {
        self == &FieldPatch::default()
    }

    /// Overlay the patch on existing form fields
    pub fn apply(&self, fields: &ItemFields) -> ItemFields {
        ItemFields {
            priority: self.priority.unwrap_or(fields.priority),
            item: self.item.clone().unwrap_or_else(|| fields.item.clone()),
            quantity: self.quantity.unwrap_or(fields.quantity),
            details: self.details.clone().unwrap_or_else(|| fields.details.clone()),
        }
    }
}

/// Commands understood by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Add(ItemFields),
    /// 1-based position in the current list
    Select { position: usize },
    Edit(FieldPatch),
    Delete { position: Option<usize> },
    Unselect,
    ClearAll,
    Copy,
    Reload,
    Help,
    Quit,
}

/// Parse a shell command from text input
pub fn parse_command(input: &str) -> Result<ShellCommand, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    match command.as_str() {
        "list" | "ls" | "show" => Ok(ShellCommand::List),

        "add" | "new" | "create" => {
            let patch = parse_fields(args)?;
            let item = patch
                .item
                .clone()
                .ok_or_else(|| ParseError::MissingArgument("add".to_string()))?;
            Ok(ShellCommand::Add(ItemFields {
                priority: patch.priority.unwrap_or(DEFAULT_PRIORITY),
                item,
                quantity: patch.quantity.unwrap_or(DEFAULT_QUANTITY),
                details: patch.details.unwrap_or_default(),
            }))
        }

        "select" | "pick" => {
            let raw = args
                .first()
                .ok_or_else(|| ParseError::MissingArgument("select".to_string()))?;
            Ok(ShellCommand::Select {
                position: parse_position(raw)?,
            })
        }

        "edit" | "update" => {
            let patch = parse_fields(args)?;
            if patch.is_empty() {
                return Err(ParseError::MissingArgument("edit".to_string()));
            }
            Ok(ShellCommand::Edit(patch))
        }

        "delete" | "del" | "rm" => {
            let position = args.first().map(|raw| parse_position(raw)).transpose()?;
            Ok(ShellCommand::Delete { position })
        }

        "unselect" | "deselect" | "cancel" => Ok(ShellCommand::Unselect),
        "clear-all" | "clear" | "reset" => Ok(ShellCommand::ClearAll),
        "copy" | "export" => Ok(ShellCommand::Copy),
        "reload" | "refresh" => Ok(ShellCommand::Reload),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" | "q" => Ok(ShellCommand::Quit),

        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Parse `[name words...] [-n name...] [-q N] [-p N] [-d details...]`
///
/// `-d` takes the rest of the line.
fn parse_fields(args: &[&str]) -> Result<FieldPatch, ParseError> {
    let mut patch = FieldPatch::default();
    let mut name: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < args.len() {
        match args[i] {
            "-q" | "--quantity" => {
                patch.quantity = Some(parse_number(args.get(i + 1), "quantity")?);
                i += 2;
            }
            "-p" | "--priority" => {
                patch.priority = Some(parse_number(args.get(i + 1), "priority")?);
                i += 2;
            }
            "-d" | "--details" => {
                patch.details = Some(args[i + 1..].join(" "));
                break;
            }
            "-n" | "--name" => {
                i += 1;
                while i < args.len() && !args[i].starts_with('-') {
                    name.push(args[i]);
                    i += 1;
                }
                if name.is_empty() {
                    return Err(ParseError::MissingArgument("name".to_string()));
                }
            }
            word if word.starts_with('-') && word.len() > 1 => {
                return Err(ParseError::InvalidArgument(format!(
                    "unknown flag '{}'",
                    word
                )));
            }
            word => {
                name.push(word);
                i += 1;
            }
        }
    }

    if !name.is_empty() {
        patch.item = Some(name.join(" "));
    }

    Ok(patch)
}

fn parse_number(raw: Option<&&str>, field: &str) -> Result<i32, ParseError> {
    let raw = raw.ok_or_else(|| ParseError::MissingArgument(field.to_string()))?;
    raw.parse().map_err(|_| {
        ParseError::InvalidArgument(format!("'{}' is not a valid {}", raw, field))
    })
}

fn parse_position(raw: &str) -> Result<usize, ParseError> {
    let position: usize = raw
        .trim_start_matches('#')
        .parse()
        .map_err(|_| ParseError::InvalidArgument(format!("'{}' is not a valid number", raw)))?;
    if position == 0 {
        return Err(ParseError::InvalidArgument(
            "position must be 1 or greater".to_string(),
        ));
    }
    Ok(position)
}

/// Help text listing available commands
pub fn help_text() -> &'static str {
    r#"Commands:
  list                                  Show your shopping list
  add <name> [-q N] [-p N] [-d text]    Add an item (priority 1 normal, 2 important, 3+ urgent)
  select N                              Edit item N
  edit [-n name] [-q N] [-p N] [-d text]  Update the selected item
  delete [N]                            Delete item N, or the selected item
  unselect                              Clear the selection
  clear-all                             Delete every item (asks first)
  copy                                  Copy the list to the clipboard
  reload                                Fetch the list again
  help                                  Show this help
  quit                                  Exit"#
}
