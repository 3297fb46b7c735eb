//! Errors - カタログ読み込みの致命的エラー
//!
//! Recoverable conditions (missing or corrupt save records, failed
//! writes) are not represented here: the store resolves them to fresh
//! state or a logged, swallowed failure. Only catalog loading can fail
//! in a way the process cannot recover from.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::task::TaskId;

/// Catalog loading failure.
///
/// Fatal by design: without a catalog no task can ever be generated, so
/// callers are expected to abort startup rather than continue.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog definition: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate task id {0} in catalog")]
    DuplicateId(TaskId),

    #[error("catalog contains no tasks")]
    Empty,
}
