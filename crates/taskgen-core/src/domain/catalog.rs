//! TaskCatalog - 起動時に一度だけ読み込む不変カタログ

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::domain::errors::CatalogError;
use crate::domain::task::{Task, TaskId};

/// The full ordered set of tasks available to assign.
///
/// Loaded once at process startup and read-only afterwards. Everything
/// downstream (filtering, the task-list view) preserves the order tasks
/// appear in the definition file.
#[derive(Debug, Clone)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
}

impl TaskCatalog {
    /// Parse a catalog from JSON bytes:
    /// `[{"id": 1, "description": "...", "itemIconId": 10}, ...]`.
    ///
    /// Rejects malformed JSON, duplicate ids, and an empty task list.
    /// There is no recovery path for any of these; callers abort startup.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let tasks: Vec<Task> = serde_json::from_slice(bytes)?;
        if tasks.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<TaskId> = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(CatalogError::DuplicateId(task.id));
            }
        }

        Ok(Self { tasks })
    }

    /// Read and parse a catalog definition file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&bytes)
    }

    /// All tasks, in definition-file order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }
}
