//! Commands accepted inside a session, one per input line

use clap::{Args, Parser, Subcommand};
use tf_core::form::TaskForm;
use tf_core::task::{TaskCategory, TaskId, TaskPriority, TaskStatus};
use tf_core::view::{StatusFilter, ViewMode};

/// One parsed input line
#[derive(Debug, Parser)]
#[command(
    name = "taskflow",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Add a new task
    Add(AddArgs),

    /// Edit an existing task
    Edit(EditArgs),

    /// Set the status of a task
    Status { id: TaskId, status: TaskStatus },

    /// Delete a task
    #[command(visible_alias = "rm")]
    Delete { id: TaskId },

    /// Switch between all tasks and completed tasks (all|completed)
    View { mode: ViewMode },

    /// Filter by status (all|pending|in-progress|completed)
    Filter { status: StatusFilter },

    /// Show the board
    #[command(visible_alias = "ls")]
    List,

    /// Show task counts
    Counts,

    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    pub title: Option<String>,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub status: Option<TaskStatus>,

    #[arg(long)]
    pub priority: Option<TaskPriority>,

    #[arg(long)]
    pub category: Option<TaskCategory>,
}

impl AddArgs {
    /// Fill a blank form; missing required fields are left for validation
    pub fn into_form(self) -> TaskForm {
        let mut form = TaskForm::create();
        form.title = self.title.unwrap_or_default();
        form.due_date = self.due.unwrap_or_default();
        form.description = self.description.unwrap_or_default();
        form.status = self.status.unwrap_or(form.status);
        form.priority = self.priority.unwrap_or(form.priority);
        form.category = self.category.unwrap_or(form.category);
        form
    }
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: TaskId,

    #[arg(long)]
    pub title: Option<String>,

    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub status: Option<TaskStatus>,

    #[arg(long)]
    pub priority: Option<TaskPriority>,

    #[arg(long)]
    pub category: Option<TaskCategory>,
}

impl EditArgs {
    /// Overwrite only the fields that were given
    pub fn apply(self, form: &mut TaskForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(due) = self.due {
            form.due_date = due;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(status) = self.status {
            form.status = status;
        }
        if let Some(priority) = self.priority {
            form.priority = priority;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
    }
}

/// Split a line into words, honouring single and double quotes and
/// backslash escapes outside single quotes.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('"'), '\\') | (None, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| "trailing backslash".to_string())?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
