//! Derive what the board shows from the task collection

use serde::{Deserialize, Serialize};

use super::model::ViewSelection;
use crate::task::{Task, TaskCounts};

/// Filter `tasks` by `selection` and order them by due date.
///
/// The sort is stable, so tasks due on the same day keep their insertion
/// order. `tasks` itself is left untouched.
pub fn project(tasks: &[Task], selection: &ViewSelection) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| selection.admits(task.status))
        .cloned()
        .collect();
    visible.sort_by_key(|task| task.due_date);
    visible
}

/// Everything needed to draw the board once
///
/// Counts always cover the whole collection, not just the visible tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub selection: ViewSelection,
    pub counts: TaskCounts,
    pub tasks: Vec<Task>,
}

impl Board {
    pub fn new(tasks: &[Task], selection: ViewSelection) -> Self {
        Self {
            selection,
            counts: TaskCounts::tally(tasks),
            tasks: project(tasks, &selection),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskFields, TaskId, TaskStatus};
    use crate::view::{StatusFilter, ViewMode};

    fn task(id: u64, status: TaskStatus, due: &str) -> Task {
        Task::from_fields(
            TaskId(id),
            TaskFields::new(format!("Task {}", id), due.parse().unwrap()).with_status(status),
        )
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn test_empty_collection() {
        assert!(project(&[], &ViewSelection::default()).is_empty());
    }

    #[test]
    fn test_sorted_by_due_date() {
        let tasks = vec![
            task(1, TaskStatus::Pending, "2025-06-10"),
            task(2, TaskStatus::Completed, "2025-05-28"),
            task(3, TaskStatus::InProgress, "2025-06-15"),
        ];
        let visible = project(&tasks, &ViewSelection::default());
        assert_eq!(ids(&visible), vec![2, 1, 3]);
        // source order is preserved
        assert_eq!(ids(&tasks), vec![1, 2, 3]);
    }

    #[test]
    fn test_equal_dates_keep_insertion_order() {
        let tasks = vec![
            task(5, TaskStatus::Pending, "2025-06-10"),
            task(3, TaskStatus::Pending, "2025-06-01"),
            task(9, TaskStatus::Pending, "2025-06-10"),
            task(1, TaskStatus::Pending, "2025-06-10"),
        ];
        let visible = project(&tasks, &ViewSelection::default());
        assert_eq!(ids(&visible), vec![3, 5, 9, 1]);
    }

    #[test]
    fn test_mode_and_filter() {
        let tasks = vec![
            task(1, TaskStatus::Pending, "2025-06-10"),
            task(2, TaskStatus::Completed, "2025-05-28"),
            task(3, TaskStatus::InProgress, "2025-06-15"),
        ];

        let completed = ViewSelection::new(ViewMode::CompletedOnly, StatusFilter::All);
        assert_eq!(ids(&project(&tasks, &completed)), vec![2]);

        let pending = ViewSelection::new(ViewMode::All, StatusFilter::Only(TaskStatus::Pending));
        assert_eq!(ids(&project(&tasks, &pending)), vec![1]);

        let contradiction = ViewSelection::new(
            ViewMode::CompletedOnly,
            StatusFilter::Only(TaskStatus::InProgress),
        );
        assert!(project(&tasks, &contradiction).is_empty());
    }

    #[test]
    fn test_board_counts_whole_collection() {
        let tasks = vec![
            task(1, TaskStatus::Pending, "2025-06-10"),
            task(2, TaskStatus::Completed, "2025-05-28"),
        ];
        let board = Board::new(
            &tasks,
            ViewSelection::new(ViewMode::CompletedOnly, StatusFilter::All),
        );
        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.counts.total, 2);
        assert_eq!(board.counts.pending, 1);
    }
}
