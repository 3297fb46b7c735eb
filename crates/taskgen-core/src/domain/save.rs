//! SaveData - プレイヤーごとの進行状況

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::task::{Task, TaskId};

/// Completion markers keyed by task id.
///
/// Only key presence matters. The value is a placeholder written as `0`,
/// kept for compatibility with the on-disk record (`{"3": 0}`).
pub type CompletionSet = BTreeMap<TaskId, i32>;

/// Per-player progress: the task in flight (if any) plus every task id
/// ever completed.
///
/// Exactly one instance is live while a player session is active, none
/// otherwise. Invariant: `current_task` never names an id that is
/// already in `completed_tasks`: [`SaveData::complete_current`] clears
/// the slot and inserts the id in one step, so the two cannot overlap.
///
/// On-disk shape (must round-trip losslessly, including the `null`):
/// ```json
/// { "currentTask": { "id": 1, "description": "A", "itemIconId": 10 },
///   "completedTasks": { "2": 0, "3": 0 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveData {
    pub current_task: Option<Task>,
    pub completed_tasks: CompletionSet,
}

impl SaveData {
    pub fn is_completed(&self, id: TaskId) -> bool {
        self.completed_tasks.contains_key(&id)
    }

    pub fn has_current_task(&self) -> bool {
        self.current_task.is_some()
    }

    /// Record `id` as completed. Inserting an id that is already present
    /// leaves the existing marker untouched; the set only ever grows.
    pub fn mark_completed(&mut self, id: TaskId) {
        self.completed_tasks.entry(id).or_insert(0);
    }

    /// Move the in-flight task (if any) into the completed set and clear
    /// the slot. Returns the completed id, or `None` when no task was
    /// active.
    pub fn complete_current(&mut self) -> Option<TaskId> {
        let task = self.current_task.take()?;
        self.mark_completed(task.id);
        Some(task.id)
    }
}
