//! Grumpy Gordon - a grumpy command-line task tracker
//!
//! Reads one command per line, keeps an ordered list of tasks (todos,
//! deadlines, recurring events) and persists it to a flat file after every
//! change.
//!
//! # Architecture
//!
//! ```text
//! stdin line ──> parser ──> Command ──> execute(TaskList, Ui, Storage)
//!                  │                        │
//!                  └── GordonError <────────┘ (shown by the session loop)
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Task model and the ordered task list
//! - [`storage`] - Flat-file persistence
//! - [`parser`] - Raw line to [`Command`]
//! - [`command`] - Executable commands
//! - [`session`] - Interaction loop
//! - [`ui`] - Framed console output
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod session;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use command::Command;
pub use config::Config;
pub use domain::{Due, Task, TaskKind, TaskList};
pub use error::{GordonError, GordonResult};
pub use parser::parse_command;
pub use session::{LineSource, LoopState, Session};
pub use storage::Storage;
pub use ui::Ui;

/// Default location of the task file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/grumpygordon.txt";
