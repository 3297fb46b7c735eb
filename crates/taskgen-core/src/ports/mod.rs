//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部（永続化ストレージ、ホスト UI、乱数源）への
//! インターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - エンジンは具体的な UI 型・ファイルパス・乱数器に依存しない
//! - テストでは決定的な実装（FixedSequence, InMemorySaveStore）を注入

pub mod notifier;
pub mod rng;
pub mod save_store;

pub use self::notifier::{NoopNotifier, Notifier};
pub use self::rng::{FixedSequence, RandomSource, ThreadRandom};
pub use self::save_store::SaveStore;
