//! taskgen-core
//!
//! Core building blocks for the task assignment engine: a fixed catalog
//! of tasks, one randomly assigned task per player at a time, completed
//! task ids persisted across sessions.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（task, catalog, save, errors）
//! - **ports**: 抽象化レイヤー（SaveStore, Notifier, RandomSource）
//! - **app**: アプリケーションロジック（selector, session, engine）
//! - **impls**: 実装（FileSaveStore, InMemorySaveStore など開発用）
//!
//! The engine is synchronous and single-threaded: every transition runs
//! to completion inside the host event that triggered it, and exactly
//! one player's SaveData is live in memory at a time.

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::TaskEngine;
pub use domain::{CatalogError, SaveData, Task, TaskCatalog, TaskId};
