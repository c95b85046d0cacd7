//! Turns a raw input line into a [`Command`]
//!
//! Only the shape of the arguments is checked here. Whether an index actually
//! exists is left to the task list when the command runs.

use tracing::debug;

use crate::command::Command;
use crate::domain::Due;
use crate::error::{GordonError, GordonResult};

/// Marker separating a deadline's description from its due point
pub const BY_MARKER: &str = "/by";

/// Marker separating a recurring task's description from its schedule
pub const AT_MARKER: &str = "/at";

/// Parse one line of user input
pub fn parse_command(line: &str) -> GordonResult<Command> {
    let trimmed = line.trim();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    let command = match keyword {
        "list" => Command::List,
        "todo" => Command::AddTodo {
            description: required(rest, "todo <description>")?.to_string(),
        },
        "deadline" => {
            let (description, by) = split_marker(rest, BY_MARKER, "deadline <description> /by <when>")?;
            Command::AddDeadline {
                description: description.to_string(),
                by: Due::parse(by),
            }
        }
        "recurring" => {
            let (description, schedule) = split_marker(rest, AT_MARKER, "recurring <description> /at <schedule>")?;
            Command::AddRecurring {
                description: description.to_string(),
                schedule: schedule.to_string(),
            }
        }
        "done" => Command::MarkDone(parse_index(rest, "done <task number>")?),
        "undone" => Command::MarkUndone(parse_index(rest, "undone <task number>")?),
        "delete" => Command::Delete(parse_index(rest, "delete <task number>")?),
        "find" => Command::Find(required(rest, "find <keyword>")?.to_string()),
        "bye" => Command::Exit,
        _ => return Err(GordonError::UnknownCommand(line.to_string())),
    };

    debug!(?command, "Parsed command");
    Ok(command)
}

fn usage(form: &str) -> GordonError {
    GordonError::malformed(format!("That's not how it works. Try: {}", form))
}

fn required<'a>(rest: &'a str, form: &str) -> GordonResult<&'a str> {
    if rest.is_empty() { Err(usage(form)) } else { Ok(rest) }
}

/// Split `desc <marker> value`, both halves non-empty
///
/// The marker only counts as a whole word, so `/byzantine` or a URL containing
/// `/at` stays part of the description.
fn split_marker<'a>(rest: &'a str, marker: &str, form: &str) -> GordonResult<(&'a str, &'a str)> {
    let position = rest
        .match_indices(marker)
        .map(|(i, _)| i)
        .find(|&i| {
            let starts_word = rest[..i].chars().next_back().is_none_or(char::is_whitespace);
            let ends_word = rest[i + marker.len()..].chars().next().is_none_or(char::is_whitespace);
            starts_word && ends_word
        })
        .ok_or_else(|| usage(form))?;
    let (description, value) = (rest[..position].trim(), rest[position + marker.len()..].trim());

    if description.is_empty() || value.is_empty() {
        return Err(usage(form));
    }
    Ok((description, value))
}

/// Exactly one unsigned integer token; range is checked later against the list
fn parse_index(rest: &str, form: &str) -> GordonResult<usize> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token
            .parse::<usize>()
            .map_err(|_| GordonError::malformed(format!("'{}' isn't a task number. Try: {}", token, form))),
        _ => Err(usage(form)),
    }
}
