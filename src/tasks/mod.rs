//! Technique catalog and the media it references

pub mod assets;
pub mod catalog;

pub use assets::AssetCatalog;
pub use catalog::{create_task_database, Task, TaskDatabase, TaskId, DEFAULT_REMINDER_SLACK};
