//! Task records and their storage line encoding

use thiserror::Error;

use crate::error::{GordonError, GordonResult};

use super::due::Due;

/// Separator between fields of a storage line
const FIELD_SEPARATOR: &str = " | ";

/// Why a storage line could not be turned back into a task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("dangling escape character")]
    BadEscape,

    #[error("unknown task type '{0}'")]
    UnknownTag(String),

    #[error("bad done flag '{0}'")]
    BadDoneFlag(String),

    #[error("task type '{tag}' expects {expected} fields, found {found}")]
    FieldCount { tag: String, expected: usize, found: usize },

    #[error("empty description")]
    EmptyDescription,

    #[error("task type '{0}' has an empty date or schedule")]
    EmptyDetail(String),
}

/// Variant-specific part of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: Due },
    Recurring { schedule: String },
}

impl TaskKind {
    /// One-letter tag used both on screen and on disk
    pub fn glyph(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Recurring { .. } => 'R',
        }
    }

    fn extra_field(&self) -> Option<String> {
        match self {
            Self::Todo => None,
            Self::Deadline { by } => Some(by.to_string()),
            Self::Recurring { schedule } => Some(schedule.clone()),
        }
    }
}

/// A unit of tracked work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a not-yet-done task; the description is trimmed and must not be empty
    pub fn new(description: impl Into<String>, kind: TaskKind) -> GordonResult<Self> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(GordonError::malformed("A task needs a description. Use your words."));
        }

        Ok(Self {
            description,
            done: false,
            kind,
        })
    }

    pub fn todo(description: impl Into<String>) -> GordonResult<Self> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: Due) -> GordonResult<Self> {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn recurring(description: impl Into<String>, schedule: impl Into<String>) -> GordonResult<Self> {
        let schedule = schedule.into().trim().to_string();
        Self::new(description, TaskKind::Recurring { schedule })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_as_done(&mut self) {
        self.done = true;
    }

    pub fn mark_as_undone(&mut self) {
        self.done = false;
    }

    /// `X` when done, blank otherwise
    pub fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }

    /// Encode as one storage line (no trailing newline)
    pub fn to_save_format(&self) -> String {
        let mut fields = vec![
            self.kind.glyph().to_string(),
            if self.done { "1" } else { "0" }.to_string(),
            escape(&self.description),
        ];
        if let Some(extra) = self.kind.extra_field() {
            fields.push(escape(&extra));
        }
        fields.join(FIELD_SEPARATOR)
    }

    /// Decode one storage line written by [`Task::to_save_format`]
    pub fn from_save_format(line: &str) -> Result<Self, DecodeError> {
        let fields = split_fields(line)?;
        let tag = fields[0].as_str();

        let expected = match tag {
            "T" => 3,
            "D" | "R" => 4,
            _ => return Err(DecodeError::UnknownTag(tag.to_string())),
        };
        if fields.len() != expected {
            return Err(DecodeError::FieldCount {
                tag: tag.to_string(),
                expected,
                found: fields.len(),
            });
        }

        let done = match fields[1].as_str() {
            "1" => true,
            "0" => false,
            other => return Err(DecodeError::BadDoneFlag(other.to_string())),
        };

        if expected == 4 && fields[3].is_empty() {
            return Err(DecodeError::EmptyDetail(tag.to_string()));
        }

        let kind = match tag {
            "D" => TaskKind::Deadline {
                by: Due::parse(&fields[3]),
            },
            "R" => TaskKind::Recurring {
                schedule: fields[3].clone(),
            },
            _ => TaskKind::Todo,
        };

        let mut task = Task::new(fields[2].as_str(), kind).map_err(|_| DecodeError::EmptyDescription)?;
        task.done = done;
        Ok(task)
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}][{}] {}", self.kind.glyph(), self.status_icon(), self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Recurring { schedule } => write!(f, " (at: {})", schedule),
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('|', "\\|")
}

/// Split on unescaped `|`, unescaping and trimming each field
fn split_fields(line: &str) -> Result<Vec<String>, DecodeError> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next @ ('\\' | '|')) => current.push(next),
                _ => return Err(DecodeError::BadEscape),
            },
            '|' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    Ok(fields.into_iter().map(|f| f.trim().to_string()).collect())
}
