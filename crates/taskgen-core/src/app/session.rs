//! Session - アクティブプレイヤーのセッションコンテキスト

use crate::domain::{SaveData, Task, TaskId};

/// State for the one player whose SaveData is currently in memory.
///
/// Constructed when the host reports a session start, dropped after the
/// final save on session end. Exactly one exists while a player is
/// active, none otherwise; there is no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct Session {
    player_key: String,
    data: SaveData,
}

impl Session {
    pub fn new(player_key: impl Into<String>, data: SaveData) -> Self {
        Self {
            player_key: player_key.into(),
            data,
        }
    }

    pub fn player_key(&self) -> &str {
        &self.player_key
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.data.current_task.as_ref()
    }

    pub fn is_completed(&self, id: TaskId) -> bool {
        self.data.is_completed(id)
    }

    pub(crate) fn assign(&mut self, task: Task) {
        self.data.current_task = Some(task);
    }

    pub(crate) fn complete_current(&mut self) -> Option<TaskId> {
        self.data.complete_current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_from_the_loaded_save_data() {
        let mut data = SaveData::default();
        data.mark_completed(TaskId(2));

        let session = Session::new("player-1", data);
        assert_eq!(session.player_key(), "player-1");
        assert!(session.current_task().is_none());
        assert!(session.is_completed(TaskId(2)));
    }

    #[test]
    fn assign_then_complete_moves_the_id() {
        let mut session = Session::new("player-1", SaveData::default());
        session.assign(Task::new(5, "E", 50));

        assert_eq!(session.current_task().map(|t| t.id), Some(TaskId(5)));
        assert_eq!(session.complete_current(), Some(TaskId(5)));
        assert!(session.current_task().is_none());
        assert!(session.is_completed(TaskId(5)));
    }
}
