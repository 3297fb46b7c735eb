//! Task - カタログの1エントリ（id, 説明, アイコン）

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog task.
///
/// Ids come from the catalog definition file and are unique across the
/// catalog. On the wire they are plain integers (`{"id": 3, ...}`); as
/// keys of the completed-task map they appear as strings (`{"3": 0}`),
/// which is how serde_json writes integer map keys.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i32> for TaskId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A single assignable task from the catalog.
///
/// Immutable once loaded. `item_icon_id` is an opaque sprite/item
/// reference for the host UI; the engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub item_icon_id: i32,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, description: impl Into<String>, item_icon_id: i32) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            item_icon_id,
        }
    }
}
