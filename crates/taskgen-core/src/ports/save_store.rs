//! SaveStore port - 永続化の抽象化

use crate::domain::SaveData;

/// SaveStore keeps one persisted SaveData record per player key.
///
/// The key is an opaque identity string supplied by the host; the store
/// never interprets it beyond using it to address the record.
///
/// # Contract
/// - `load` never fails. A missing record yields a fresh empty SaveData
///   and creates the empty backing record; a record that exists but does
///   not parse is logged and replaced by a fresh one (progress in the
///   corrupt record is lost, see DESIGN.md).
/// - `save` serializes and overwrites synchronously. Failure is logged
///   and swallowed: the in-memory state stays correct, only durability
///   is lost until the next successful write.
pub trait SaveStore {
    fn load(&mut self, player_key: &str) -> SaveData;
    fn save(&mut self, player_key: &str, data: &SaveData);
}
