//! Interaction loop
//!
//! Reads a line, parses it, runs the command, and repeats until `bye` or end
//! of input. Recoverable errors are shown to the user and the loop carries on.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::domain::TaskList;
use crate::error::{GordonError, GordonResult};
use crate::parser::parse_command;
use crate::storage::Storage;
use crate::ui::Ui;

/// Where input lines come from
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Lines from any buffered reader (piped stdin, files, test buffers)
///
/// Bytes that aren't valid UTF-8 are replaced rather than ending the session.
pub struct ReaderSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Lines from an interactive terminal with editing and history
pub struct EditorSource {
    editor: DefaultEditor,
    history: bool,
}

impl EditorSource {
    pub fn new(history: bool) -> io::Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| io::Error::other(format!("Failed to initialize readline: {}", e)))?;
        Ok(Self { editor, history })
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.editor.readline("") {
                Ok(line) => {
                    if self.history && !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Ok(Some(line));
                }
                // Ctrl+C - just read again
                Err(ReadlineError::Interrupted) => continue,
                // Ctrl+D
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(io::Error::other(format!("Readline error: {}", e))),
            }
        }
    }
}

/// Whether the loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// One run of the assistant: owns the task list, its storage and the output
pub struct Session<W: Write> {
    tasks: TaskList,
    storage: Storage,
    ui: Ui<W>,
    state: LoopState,
}

impl<W: Write> Session<W> {
    pub fn new(tasks: TaskList, storage: Storage, ui: Ui<W>) -> Self {
        Self {
            tasks,
            storage,
            ui,
            state: LoopState::Running,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ui_mut(&mut self) -> &mut Ui<W> {
        &mut self.ui
    }

    /// Show the greeting, then process lines until `bye` or end of input
    ///
    /// Only unrecoverable errors (console I/O) are returned.
    pub fn run(&mut self, input: &mut dyn LineSource) -> GordonResult<()> {
        self.ui.show_intro()?;

        while self.state == LoopState::Running {
            let Some(line) = input.next_line().map_err(GordonError::Input)? else {
                info!("End of input");
                self.state = LoopState::Terminated;
                break;
            };

            match self.handle_line(&line) {
                Ok(state) => self.state = state,
                Err(e) if e.is_recoverable() => {
                    info!(error = %e, "Command failed");
                    self.ui.show_error(&e)?;
                }
                Err(e) => return Err(e),
            }
        }

        debug!(tasks = self.tasks.len(), "Session finished");
        Ok(())
    }

    /// Parse and execute a single line, returning the next loop state
    pub fn handle_line(&mut self, line: &str) -> GordonResult<LoopState> {
        let command = parse_command(line)?;
        command.execute(&mut self.tasks, &mut self.ui, &self.storage)?;

        if command.is_exit() {
            info!("Exit requested");
            Ok(LoopState::Terminated)
        } else {
            Ok(LoopState::Running)
        }
    }
}
