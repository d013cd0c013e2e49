//! Task module
//!
//! This module contains task-related types and the task store.

mod model;
mod seed;
mod store;

pub(crate) use model::normalize;
pub use model::{Task, TaskCategory, TaskCounts, TaskFields, TaskId, TaskPriority, TaskStatus};
pub use seed::seed_tasks;
pub use store::{StoreEvent, TaskStore};
