use crate::render::format_items;
use std::io::{BufRead, Write};
use std::str::FromStr;
use todo_core::{TodoError, TodoResult};
use todo_domain::ItemId;
use todo_surface::TodoSurface;

const HELP: &str = "\
Commands:
  add <text>          add an item
  rm <id>             remove an item
  toggle <id>         mark an item done or not done
  edit <id>           open the edit modal seeded with the item's text
  draft <id> <text>   replace the text in an open edit modal
  save <id> [text]    save the edit modal (its draft when no text is given)
  cancel <id>         close the edit modal without saving
  cat <id>            advance the item's category
  list                show all items
  help                show this message
  quit                leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Add(String),
    Remove(ItemId),
    Toggle(ItemId),
    EditOpen(ItemId),
    Draft(ItemId, String),
    Save(ItemId, Option<String>),
    Cancel(ItemId),
    Categorize(ItemId),
    List,
    Help,
    Quit,
}

fn parse_id(word: &str) -> TodoResult<ItemId> {
    word.parse()
        .map_err(|_| TodoError::Validation(format!("'{}' is not an item id", word)))
}

/// Split `"<id> <text>"`; the text keeps any inner and trailing spaces.
fn parse_id_and_text(rest: &str) -> TodoResult<(ItemId, Option<String>)> {
    match rest.split_once(' ') {
        Some((id, text)) => Ok((parse_id(id)?, Some(text.to_string()))),
        None => Ok((parse_id(rest)?, None)),
    }
}

impl FromStr for ReplCommand {
    type Err = TodoError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let command = match word.to_lowercase().as_str() {
            "add" => ReplCommand::Add(rest.to_string()),
            "rm" | "remove" => ReplCommand::Remove(parse_id(rest.trim())?),
            "toggle" => ReplCommand::Toggle(parse_id(rest.trim())?),
            "edit" => ReplCommand::EditOpen(parse_id(rest.trim())?),
            "draft" => {
                let (id, text) = parse_id_and_text(rest)?;
                ReplCommand::Draft(id, text.unwrap_or_default())
            }
            "save" => {
                let (id, text) = parse_id_and_text(rest)?;
                ReplCommand::Save(id, text)
            }
            "cancel" => ReplCommand::Cancel(parse_id(rest.trim())?),
            "cat" | "category" => ReplCommand::Categorize(parse_id(rest.trim())?),
            "list" | "ls" => ReplCommand::List,
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            other => {
                return Err(TodoError::Validation(format!(
                    "unknown command '{}', try 'help'",
                    other
                )))
            }
        };
        Ok(command)
    }
}

/// Run one command. Returns false when the session should end.
fn execute<W: Write>(
    surface: &mut TodoSurface,
    command: ReplCommand,
    out: &mut W,
) -> TodoResult<bool> {
    match command {
        ReplCommand::Add(text) => {
            if surface.submit_insert(text).is_none() {
                writeln!(out, "Nothing to add")?;
            }
        }
        ReplCommand::Remove(id) => {
            if !surface.submit_remove(id) {
                writeln!(out, "No item {}", id)?;
            }
        }
        ReplCommand::Toggle(id) => {
            if !surface.submit_toggle(id) {
                writeln!(out, "No item {}", id)?;
            }
        }
        ReplCommand::EditOpen(id) => {
            if surface.submit_edit_open(id) {
                let draft = surface.edit_draft(id).map(|d| d.as_str()).unwrap_or_default();
                writeln!(out, "Editing {}: {}", id, draft)?;
            } else {
                writeln!(out, "No item {}", id)?;
            }
        }
        ReplCommand::Draft(id, text) => match surface.edit_draft_mut(id) {
            Some(draft) => {
                draft.set(text);
                writeln!(out, "Editing {}: {}", id, draft.as_str())?;
            }
            None => writeln!(out, "Item {} is not being edited", id)?,
        },
        ReplCommand::Save(id, text) => {
            if !surface.is_edit_open(id) {
                writeln!(out, "Item {} is not being edited", id)?;
            } else {
                let saved = match text {
                    Some(text) => surface.submit_edit_save(id, text),
                    None => surface.submit_edit_save_draft(id),
                };
                if !saved && surface.is_edit_open(id) {
                    writeln!(out, "Text cannot be empty")?;
                }
            }
        }
        ReplCommand::Cancel(id) => {
            if !surface.submit_edit_cancel(id) {
                writeln!(out, "Item {} is not being edited", id)?;
            }
        }
        ReplCommand::Categorize(id) => {
            if !surface.submit_recategorize_item(id) {
                writeln!(out, "No item {}", id)?;
            }
        }
        ReplCommand::List => write!(out, "{}", format_items(surface.items()))?,
        ReplCommand::Help => writeln!(out, "{}", HELP)?,
        ReplCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Read commands line by line until end of input or `quit`.
pub fn run<R: BufRead, W: Write>(surface: &mut TodoSurface, input: R, out: &mut W) -> TodoResult<()> {
    write!(out, "{}", format_items(surface.items()))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ReplCommand>() {
            Ok(command) => {
                if !execute(surface, command, out)? {
                    break;
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        out.flush()?;
    }

    Ok(())
}
