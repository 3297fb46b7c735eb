//! InMemorySaveStore - テスト・開発用の永続化

use std::collections::HashMap;

use tracing::warn;

use crate::domain::SaveData;
use crate::ports::SaveStore;

/// In-memory save store keyed by player key.
///
/// Records are held as serialized JSON so the store exercises the same
/// parse/fallback path as [`super::FileSaveStore`], just without the
/// filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemorySaveStore {
    records: HashMap<String, String>,
}

impl InMemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a raw record, bypassing serialization (corruption tests).
    pub fn insert_raw(&mut self, player_key: &str, raw: impl Into<String>) {
        self.records.insert(player_key.to_string(), raw.into());
    }

    pub fn contains(&self, player_key: &str) -> bool {
        self.records.contains_key(player_key)
    }
}

impl SaveStore for InMemorySaveStore {
    fn load(&mut self, player_key: &str) -> SaveData {
        let Some(raw) = self.records.get(player_key) else {
            // Empty backing record, as the file store does on first load.
            self.records.insert(player_key.to_string(), String::new());
            return SaveData::default();
        };

        if raw.trim().is_empty() {
            return SaveData::default();
        }

        match serde_json::from_str(raw) {
            Ok(data) => data,
            Err(e) => {
                warn!(player_key, "malformed save record, starting fresh: {e}");
                SaveData::default()
            }
        }
    }

    fn save(&mut self, player_key: &str, data: &SaveData) {
        match serde_json::to_string(data) {
            Ok(json) => {
                self.records.insert(player_key.to_string(), json);
            }
            Err(e) => warn!(player_key, "failed to serialize save data: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    #[test]
    fn load_creates_an_empty_backing_record() {
        let mut store = InMemorySaveStore::new();
        assert!(!store.contains("p"));

        let data = store.load("p");
        assert_eq!(data, SaveData::default());
        assert!(store.contains("p"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemorySaveStore::new();
        let mut data = SaveData::default();
        data.mark_completed(TaskId(4));

        store.save("p", &data);
        assert_eq!(store.load("p"), data);
    }

    #[test]
    fn malformed_record_falls_back_to_fresh_state() {
        let mut store = InMemorySaveStore::new();
        store.insert_raw("p", "not json at all");
        assert_eq!(store.load("p"), SaveData::default());
    }
}
