//! Executable commands
//!
//! A command is built fresh by the parser for each input line, runs once
//! against the task list, and is dropped. Mutating commands save the list
//! before reporting back; a failed save leaves the in-memory change in place.

use std::io::Write;
use tracing::info;

use crate::domain::{Due, Task, TaskList};
use crate::error::GordonResult;
use crate::storage::Storage;
use crate::ui::Ui;

/// One user action with its validated arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    AddTodo { description: String },
    AddDeadline { description: String, by: Due },
    AddRecurring { description: String, schedule: String },
    /// 1-based task number
    MarkDone(usize),
    /// 1-based task number
    MarkUndone(usize),
    /// 1-based task number
    Delete(usize),
    Find(String),
    Exit,
}

impl Command {
    /// Check if this command ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Apply the command and report the result through `ui`
    pub fn execute<W: Write>(&self, tasks: &mut TaskList, ui: &mut Ui<W>, storage: &Storage) -> GordonResult<()> {
        match self {
            Command::List => {
                let message = if tasks.is_empty() {
                    "You've got nothing to do. Lucky you.".to_string()
                } else {
                    let mut message = "Here's your pile of tasks:".to_string();
                    for (position, task) in tasks.iter().enumerate() {
                        message.push_str(&format!("\n{}. {}", position + 1, task));
                    }
                    message
                };
                ui.show_command_message(&message)?;
            }
            Command::AddTodo { description } => {
                add(tasks, ui, storage, Task::todo(description.as_str())?)?;
            }
            Command::AddDeadline { description, by } => {
                add(tasks, ui, storage, Task::deadline(description.as_str(), by.clone())?)?;
            }
            Command::AddRecurring { description, schedule } => {
                add(tasks, ui, storage, Task::recurring(description.as_str(), schedule.as_str())?)?;
            }
            Command::MarkDone(index) => {
                let task = tasks.get_mut(*index)?;
                task.mark_as_done();
                let rendered = task.to_string();
                storage.save(tasks)?;
                info!(index, "Marked task done");
                ui.show_command_message(&format!("Finally. I've marked this task as done:\n  {}", rendered))?;
            }
            Command::MarkUndone(index) => {
                let task = tasks.get_mut(*index)?;
                task.mark_as_undone();
                let rendered = task.to_string();
                storage.save(tasks)?;
                info!(index, "Marked task not done");
                ui.show_command_message(&format!(
                    "Typical. I've marked this task as not done yet:\n  {}",
                    rendered
                ))?;
            }
            Command::Delete(index) => {
                let removed = tasks.delete(*index)?;
                storage.save(tasks)?;
                info!(index, "Deleted task");
                ui.show_command_message(&format!(
                    "Good riddance. I've removed this task:\n  {}\n{}",
                    removed,
                    count_line(tasks.len())
                ))?;
            }
            Command::Find(keyword) => {
                let mut matches = tasks.find(keyword).peekable();
                let message = if matches.peek().is_none() {
                    format!("Nothing in your list matches '{}'. Shocking.", keyword)
                } else {
                    let mut message = "Here are the matching tasks in your list:".to_string();
                    for (index, task) in matches {
                        message.push_str(&format!("\n{}. {}", index, task));
                    }
                    message
                };
                ui.show_command_message(&message)?;
            }
            Command::Exit => {
                ui.show_outro()?;
            }
        }
        Ok(())
    }
}

fn add<W: Write>(tasks: &mut TaskList, ui: &mut Ui<W>, storage: &Storage, task: Task) -> GordonResult<()> {
    let rendered = task.to_string();
    tasks.add(task);
    storage.save(tasks)?;
    info!(count = tasks.len(), "Added task");
    ui.show_command_message(&format!(
        "Fine. I've added this task:\n  {}\n{}",
        rendered,
        count_line(tasks.len())
    ))?;
    Ok(())
}

fn count_line(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.", count, noun)
}
