//! Read-only rendering of tasks and board chrome as plain text

use std::fmt;

use crate::task::{Task, TaskCategory, TaskCounts, TaskPriority};
use crate::view::ViewMode;

pub fn category_emoji(category: TaskCategory) -> &'static str {
    match category {
        TaskCategory::Work => "💼",
        TaskCategory::Design => "🎨",
        TaskCategory::Learning => "📚",
        TaskCategory::Personal => "🌟",
    }
}

pub fn priority_marker(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => "🔥",
        TaskPriority::Medium => "⚡",
        TaskPriority::Low => "⭐",
    }
}

/// One task as a card
///
/// ```text
/// #1 💼 Launch new feature [In Progress]
///    Deploy the AI-powered analytics dashboard with real-time insights
///    Due Jun 15, 2025 · 🔥 High
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TaskCard<'a> {
    task: &'a Task,
}

impl<'a> TaskCard<'a> {
    pub fn new(task: &'a Task) -> Self {
        Self { task }
    }

    /// Due date as "Jun 15, 2025"
    pub fn due_label(&self) -> String {
        self.task.due_date.format("%b %-d, %Y").to_string()
    }
}

impl fmt::Display for TaskCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.task;
        writeln!(
            f,
            "#{} {} {} [{}]",
            task.id,
            category_emoji(task.category),
            task.title,
            task.status
        )?;
        if !task.description.is_empty() {
            writeln!(f, "   {}", task.description)?;
        }
        write!(
            f,
            "   Due {} · {} {}",
            self.due_label(),
            priority_marker(task.priority),
            task.priority
        )
    }
}

/// What to show when the current view has no tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub headline: &'static str,
    pub hint: &'static str,
}

impl EmptyState {
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::All => Self {
                headline: "Let's create something amazing!",
                hint: "Add your first task to get started.",
            },
            ViewMode::CompletedOnly => Self {
                headline: "Ready to achieve greatness!",
                hint: "Complete some tasks to see your victories here!",
            },
        }
    }
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.headline, self.hint)
    }
}

/// Labelled counters shown above the task list
pub fn stat_lines(counts: &TaskCounts) -> [(&'static str, usize); 4] {
    [
        ("Total Tasks", counts.total),
        ("Pending", counts.pending),
        ("In Progress", counts.in_progress),
        ("Completed", counts.completed),
    ]
}
