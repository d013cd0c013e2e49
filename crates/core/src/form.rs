//! Task form
//!
//! Collects raw input for a new or edited task, checks the required fields and
//! only then hands a complete record to the store. A form that fails
//! validation never touches the store.

use chrono::NaiveDate;
use std::fmt;
use tracing::debug;

use crate::task::{Task, TaskCategory, TaskFields, TaskId, TaskPriority, TaskStatus, TaskStore};
use crate::Result;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DUE_DATE_REQUIRED: &str = "Due date is required";
pub const DUE_DATE_INVALID: &str = "Due date must be a valid date (YYYY-MM-DD)";

/// Field-level validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub due_date: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.due_date.is_none()
    }

    /// `(field, message)` pairs in form order
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(msg) = &self.title {
            out.push(("title", msg.as_str()));
        }
        if let Some(msg) = &self.due_date {
            out.push(("due date", msg.as_str()));
        }
        out
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields().into_iter().map(|(_, msg)| msg).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Whether submitting creates a task or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(TaskId),
}

/// Raw form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub target: FormTarget,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Due date exactly as typed
    pub due_date: String,
    pub priority: TaskPriority,
    pub category: TaskCategory,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::create()
    }
}

impl TaskForm {
    /// Blank form for a new task
    pub fn create() -> Self {
        Self {
            target: FormTarget::Create,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::default(),
            due_date: String::new(),
            priority: TaskPriority::default(),
            category: TaskCategory::default(),
        }
    }

    /// Form pre-filled from an existing task
    pub fn edit(task: &Task) -> Self {
        Self {
            target: FormTarget::Edit(task.id),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            due_date: task.due_date.format("%Y-%m-%d").to_string(),
            priority: task.priority,
            category: task.category,
        }
    }

    /// Check required fields and build the record the store expects
    pub fn validate(&self) -> std::result::Result<TaskFields, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.title = Some(TITLE_REQUIRED.to_string());
        }

        let due_text = self.due_date.trim();
        let due_date = if due_text.is_empty() {
            errors.due_date = Some(DUE_DATE_REQUIRED.to_string());
            None
        } else {
            match NaiveDate::parse_from_str(due_text, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.due_date = Some(DUE_DATE_INVALID.to_string());
                    None
                }
            }
        };

        match due_date {
            Some(due_date) if errors.is_empty() => Ok(TaskFields {
                title: title.to_string(),
                description: self.description.clone(),
                status: self.status,
                due_date,
                priority: self.priority,
                category: self.category,
            }),
            _ => Err(errors),
        }
    }

    /// Validate and apply the form to `store`
    ///
    /// Returns the created or updated task. Editing a task that no longer
    /// exists leaves the store unchanged and returns `None`.
    pub fn submit(&self, store: &mut TaskStore) -> Result<Option<Task>> {
        let fields = self.validate().map_err(|errors| {
            debug!(%errors, "Form rejected");
            errors
        })?;

        match self.target {
            FormTarget::Create => Ok(Some(store.add_task(fields))),
            FormTarget::Edit(id) => {
                if store.update_task(id, fields) {
                    Ok(store.get(id).cloned())
                } else {
                    Ok(None)
                }
            }
        }
    }
}
