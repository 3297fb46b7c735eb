//! App - アプリケーション層
//!
//! ports を組み合わせて generate/complete の状態遷移を実装します。
//!
//! # 主要コンポーネント
//! - **selector**: 未完了タスクの絞り込みと一様ランダム選択（純関数）
//! - **Session**: アクティブプレイヤーのセッションコンテキスト
//! - **TaskEngine**: 状態遷移・通知・永続化のオーケストレーション

pub mod engine;
pub mod selector;
pub mod session;

pub use self::engine::TaskEngine;
pub use self::session::Session;
