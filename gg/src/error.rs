//! Error types for Grumpy Gordon

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing and executing commands
#[derive(Debug, Error)]
pub enum GordonError {
    #[error("What on earth is '{0}'? I don't know that command.")]
    UnknownCommand(String),

    #[error("{0}")]
    MalformedArguments(String),

    #[error("Task {index} doesn't exist. You've only got {size} task(s), genius.")]
    InvalidIndex { index: usize, size: usize },

    #[error("Couldn't save your tasks to {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't read your tasks from {path}: {source}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("Failed to write response: {0}")]
    Output(#[from] io::Error),
}

/// Result alias for Grumpy Gordon operations
pub type GordonResult<T> = Result<T, GordonError>;

impl GordonError {
    /// Create a malformed-arguments error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedArguments(message.into())
    }

    /// Check if the session loop can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        match self {
            GordonError::UnknownCommand(_) => true,
            GordonError::MalformedArguments(_) => true,
            GordonError::InvalidIndex { .. } => true,
            GordonError::StorageWrite { .. } => true,
            GordonError::StorageRead { .. } => false,
            GordonError::Input(_) => false,
            GordonError::Output(_) => false,
        }
    }
}
