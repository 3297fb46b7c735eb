//! Domain model (tasks, catalog, save data, errors).

pub mod catalog;
pub mod errors;
pub mod save;
pub mod task;

pub use self::catalog::TaskCatalog;
pub use self::errors::CatalogError;
pub use self::save::{CompletionSet, SaveData};
pub use self::task::{Task, TaskId};
