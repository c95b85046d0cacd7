//! Domain types for Grumpy Gordon
//!
//! Core domain types: Task, TaskList
//! Task variants form a closed set (`TaskKind`) and share one storage encoding.

mod due;
mod list;
mod task;

pub use due::Due;
pub use list::TaskList;
pub use task::{DecodeError, Task, TaskKind};
