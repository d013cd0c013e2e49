//! Core library for TaskFlow
//!
//! This crate contains the board's business logic, including:
//! - Task model and the in-memory task store
//! - View projection (filtering and ordering of what is shown)
//! - Presentation adapters (task form validation, card rendering)

pub mod card;
pub mod error;
pub mod form;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
