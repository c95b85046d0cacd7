//! Ordered task list
//!
//! Indices handed in from the user are 1-based; the backing `Vec` is 0-based.

use crate::error::{GordonError, GordonResult};

use super::task::Task;

/// Tasks in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the end of the list
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Look up a task by its 1-based index
    pub fn get(&self, index: usize) -> GordonResult<&Task> {
        let position = self.position(index)?;
        Ok(&self.tasks[position])
    }

    /// Look up a task by its 1-based index for mutation
    pub fn get_mut(&mut self, index: usize) -> GordonResult<&mut Task> {
        let position = self.position(index)?;
        Ok(&mut self.tasks[position])
    }

    /// Remove and return the task at a 1-based index; later tasks shift down by one
    pub fn delete(&mut self, index: usize) -> GordonResult<Task> {
        let position = self.position(index)?;
        Ok(self.tasks.remove(position))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Tasks whose description contains `keyword` (case-sensitive), paired
    /// with their 1-based index in the full list
    pub fn find<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = (usize, &'a Task)> + 'a {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, task)| task.description().contains(keyword))
            .map(|(position, task)| (position + 1, task))
    }

    fn position(&self, index: usize) -> GordonResult<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(GordonError::InvalidIndex {
                index,
                size: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
