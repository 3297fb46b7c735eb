//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **FileSaveStore**: 本番用（1 プレイヤー = 1 JSON ファイル）
//! - **InMemorySaveStore**: テスト・開発用

pub mod file_store;
pub mod memory_store;

pub use self::file_store::FileSaveStore;
pub use self::memory_store::InMemorySaveStore;
