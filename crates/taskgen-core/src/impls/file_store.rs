//! FileSaveStore - 1 プレイヤー = 1 JSON ファイルの永続化

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::domain::SaveData;
use crate::ports::SaveStore;

/// File-backed save store: one `<player_key>.json` per player under a
/// root directory.
///
/// All failure modes follow the [`SaveStore`] contract: loads fall back
/// to fresh state, writes are logged and swallowed. Nothing here returns
/// an error to the caller.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    root: PathBuf,
}

impl FileSaveStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, player_key: &str) -> PathBuf {
        self.root.join(format!("{player_key}.json"))
    }

    fn ensure_root(&self) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            error!(root = %self.root.display(), "failed to create save directory: {e}");
        }
    }

    fn read_record(path: &Path) -> SaveData {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %path.display(), "failed to read save record, starting fresh: {e}");
                return SaveData::default();
            }
        };

        // A freshly created backing record is empty; not corruption.
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return SaveData::default();
        }

        match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), "malformed save record, starting fresh: {e}");
                SaveData::default()
            }
        }
    }
}

impl SaveStore for FileSaveStore {
    fn load(&mut self, player_key: &str) -> SaveData {
        self.ensure_root();
        let path = self.record_path(player_key);

        if !path.exists() {
            // First session for this player: create the empty backing
            // record so later saves overwrite a known file.
            if let Err(e) = fs::File::create(&path) {
                error!(path = %path.display(), "failed to create save record: {e}");
            }
            return SaveData::default();
        }

        Self::read_record(&path)
    }

    fn save(&mut self, player_key: &str, data: &SaveData) {
        self.ensure_root();
        let path = self.record_path(player_key);

        let json = match serde_json::to_string(data) {
            Ok(json) => json,
            Err(e) => {
                error!(path = %path.display(), "failed to serialize save data: {e}");
                return;
            }
        };

        match fs::write(&path, json) {
            Ok(()) => debug!(player_key, "saved player data"),
            Err(e) => error!(path = %path.display(), "failed to write save record: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TaskId};

    #[test]
    fn missing_record_yields_fresh_state_and_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSaveStore::new(dir.path());

        let data = store.load("player-1");
        assert_eq!(data, SaveData::default());
        assert!(dir.path().join("player-1.json").exists());
    }

    #[test]
    fn empty_backing_record_yields_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSaveStore::new(dir.path());

        store.load("player-1");
        let again = store.load("player-1");
        assert_eq!(again, SaveData::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSaveStore::new(dir.path());

        let mut data = SaveData::default();
        data.current_task = Some(Task::new(1, "A", 10));
        data.mark_completed(TaskId(2));

        store.save("player-1", &data);
        assert_eq!(store.load("player-1"), data);
    }

    #[test]
    fn malformed_record_falls_back_to_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSaveStore::new(dir.path());

        fs::write(dir.path().join("player-1.json"), b"{broken").unwrap();
        assert_eq!(store.load("player-1"), SaveData::default());
    }

    #[test]
    fn save_overwrites_the_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSaveStore::new(dir.path());

        let mut data = SaveData::default();
        data.mark_completed(TaskId(1));
        store.save("player-1", &data);

        data.mark_completed(TaskId(2));
        store.save("player-1", &data);

        let loaded = store.load("player-1");
        assert_eq!(loaded.completed_tasks.len(), 2);
    }

    #[test]
    fn records_are_isolated_per_player_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSaveStore::new(dir.path());

        let mut data = SaveData::default();
        data.mark_completed(TaskId(1));
        store.save("player-1", &data);

        assert_eq!(store.load("player-2"), SaveData::default());
        assert_eq!(store.load("player-1"), data);
    }
}
