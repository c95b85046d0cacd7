//! Flat-file persistence for the task list
//!
//! One task per line, see [`Task::to_save_format`]. Saving rewrites the whole
//! file; loading skips lines that don't decode instead of failing.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::domain::{Task, TaskList};
use crate::error::{GordonError, GordonResult};

/// Reads and writes the task file
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list; a missing file gives an empty list
    pub fn load(&self) -> GordonResult<TaskList> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No task file yet, starting empty");
                return Ok(TaskList::new());
            }
            Err(source) => {
                return Err(GordonError::StorageRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let mut skipped = 0usize;
        let tasks: TaskList = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(number, line)| match Task::from_save_format(line) {
                Ok(task) => Some(task),
                Err(e) => {
                    warn!(line = number + 1, error = %e, "Skipping corrupt task line");
                    skipped += 1;
                    None
                }
            })
            .collect();

        info!(
            path = %self.path.display(),
            loaded = tasks.len(),
            skipped,
            "Loaded tasks"
        );
        Ok(tasks)
    }

    /// Overwrite the file with the current list, creating the parent directory if needed
    pub fn save(&self, tasks: &TaskList) -> GordonResult<()> {
        let write_err = |source| GordonError::StorageWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut content = String::new();
        for task in tasks.iter() {
            content.push_str(&task.to_save_format());
            content.push('\n');
        }

        fs::write(&self.path, content).map_err(write_err)?;
        debug!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Due;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_list() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("nope.txt"));

        let tasks = storage.load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data").join("grumpygordon.txt");
        let storage = Storage::new(&path);

        let tasks: TaskList = vec![Task::todo("buy milk").unwrap()].into_iter().collect();
        storage.save(&tasks).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "T | 0 | buy milk\n");
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("tasks.txt"));

        let mut tasks = TaskList::new();
        tasks.add(Task::todo("buy milk").unwrap());
        tasks.add(Task::deadline("submit report", Due::parse("2024-12-01")).unwrap());
        tasks.add(Task::recurring("water plants", "every monday").unwrap());
        tasks.get_mut(2).unwrap().mark_as_done();
        storage.save(&tasks).unwrap();

        assert_eq!(storage.load().unwrap(), tasks);
    }

    #[test]
    fn test_save_overwrites() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path().join("tasks.txt"));

        let mut tasks: TaskList = vec![Task::todo("a").unwrap(), Task::todo("b").unwrap()].into_iter().collect();
        storage.save(&tasks).unwrap();

        tasks.delete(1).unwrap();
        storage.save(&tasks).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(1).unwrap().description(), "b");
    }

    #[test]
    fn test_corrupt_lines_are_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.txt");
        fs::write(
            &path,
            "T | 0 | keep me\nthis is not a task\n\nD | 1 | missing date\nZ | 0 | bad tag\nR | 1 | gym | every day\n",
        )
        .unwrap();

        let tasks = Storage::new(&path).load().unwrap();
        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description()).collect();
        assert_eq!(descriptions, vec!["keep me", "gym"]);
        assert!(tasks.get(2).unwrap().is_done());
    }

    #[test]
    fn test_unwritable_path_is_storage_write_error() {
        let temp = TempDir::new().unwrap();
        // The data "file" is a directory, so the write must fail
        let storage = Storage::new(temp.path());

        let err = storage.save(&TaskList::new()).unwrap_err();
        assert!(matches!(err, GordonError::StorageWrite { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unreadable_path_is_storage_read_error() {
        let temp = TempDir::new().unwrap();
        let storage = Storage::new(temp.path());

        assert!(matches!(storage.load(), Err(GordonError::StorageRead { .. })));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Todo(String),
        Deadline(String, String),
        Recurring(String, String),
        Mark(usize),
        Unmark(usize),
        Delete(usize),
    }

    fn text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9|\\\\ -]{0,12}[a-zA-Z0-9|\\\\-]".prop_map(|s| s.trim().to_string())
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            text().prop_map(Op::Todo),
            (text(), prop_oneof![text(), Just("2024-12-01".to_string()), Just("2025-03-04 1730".to_string())])
                .prop_map(|(d, by)| Op::Deadline(d, by)),
            (text(), text()).prop_map(|(d, s)| Op::Recurring(d, s)),
            (1usize..8).prop_map(Op::Mark),
            (1usize..8).prop_map(Op::Unmark),
            (1usize..8).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn prop_save_load_round_trip(ops in prop::collection::vec(op(), 0..24)) {
            let mut tasks = TaskList::new();
            for op in ops {
                // Invalid indices are rejected by the list itself; that's fine here
                let _ = match op {
                    Op::Todo(d) => Task::todo(d).map(|t| tasks.add(t)),
                    Op::Deadline(d, by) => Task::deadline(d, Due::parse(&by)).map(|t| tasks.add(t)),
                    Op::Recurring(d, s) => Task::recurring(d, s).map(|t| tasks.add(t)),
                    Op::Mark(i) => tasks.get_mut(i).map(|t| t.mark_as_done()),
                    Op::Unmark(i) => tasks.get_mut(i).map(|t| t.mark_as_undone()),
                    Op::Delete(i) => tasks.delete(i).map(|_| ()),
                };
            }

            let temp = TempDir::new().unwrap();
            let storage = Storage::new(temp.path().join("tasks.txt"));
            storage.save(&tasks).unwrap();
            prop_assert_eq!(storage.load().unwrap(), tasks);
        }
    }
}
