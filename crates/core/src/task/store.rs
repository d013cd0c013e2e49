//! In-memory task store
//!
//! The single owner of the task collection and of the current view selection.
//! Consumers that need to react to changes register a listener; every applied
//! change is announced once, after the collection has been updated.

use chrono::Utc;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use super::model::{Task, TaskCounts, TaskFields, TaskId};
use super::seed::seed_tasks;
use crate::view::{project, Board, StatusFilter, ViewMode, ViewSelection};
use crate::{Error, Result};

/// A change that has been applied to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(Task),
    Updated(Task),
    Deleted(Task),
    SelectionChanged(ViewSelection),
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Task store holding tasks in insertion order
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    selection: ViewSelection,
    last_id: u64,
    listeners: Vec<Listener>,
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("selection", &self.selection)
            .field("last_id", &self.last_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given tasks, in order
    ///
    /// Fails with `InvalidInput` when two tasks share an id. Ids handed out
    /// later never collide with an id in `tasks`.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(dup) = tasks.iter().find(|t| !seen.insert(t.id)) {
            return Err(Error::InvalidInput(format!("duplicate task id {}", dup.id)));
        }
        Ok(Self::holding(tasks))
    }

    /// Create a store holding the sample tasks shown on first load
    pub fn with_seed_tasks() -> Self {
        Self::holding(seed_tasks())
    }

    fn holding(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        Self {
            tasks,
            last_id,
            ..Self::default()
        }
    }

    /// Register a listener called after every applied change
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Ids follow the creation time in milliseconds but never repeat or go
    /// backwards. Once `u64::MAX` is taken, the lowest free id is reused.
    fn next_id(&mut self) -> TaskId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        match self.last_id.checked_add(1) {
            Some(next) => {
                self.last_id = now.max(next);
                TaskId(self.last_id)
            }
            None => (1..=u64::MAX)
                .map(TaskId)
                .find(|id| self.get(*id).is_none())
                .unwrap_or(TaskId(0)),
        }
    }

    /// Append a new task built from `fields` and return it
    ///
    /// Fields are taken as given; validation belongs to the form.
    pub fn add_task(&mut self, fields: TaskFields) -> Task {
        let task = Task::from_fields(self.next_id(), fields);
        debug!(task_id = %task.id, title = %task.title, "Task added");
        self.tasks.push(task.clone());
        self.emit(StoreEvent::Added(task.clone()));
        task
    }

    /// Replace every field of the task with `id`, keeping the id
    ///
    /// Unknown ids are ignored. Returns whether a task was replaced.
    pub fn update_task(&mut self, id: TaskId, fields: TaskFields) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(task_id = %id, "Update ignored, no such task");
            return false;
        };
        *slot = Task::from_fields(id, fields);
        let task = slot.clone();
        debug!(task_id = %id, status = %task.status, "Task updated");
        self.emit(StoreEvent::Updated(task));
        true
    }

    /// Remove the task with `id`; unknown ids are ignored
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(task_id = %id, "Delete ignored, no such task");
            return None;
        };
        let task = self.tasks.remove(index);
        debug!(task_id = %id, "Task deleted");
        self.emit(StoreEvent::Deleted(task.clone()));
        Some(task)
    }

    /// Count tasks per status
    pub fn task_counts(&self) -> TaskCounts {
        TaskCounts::tally(&self.tasks)
    }

    /// Get a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a task by id, failing when it does not exist
    pub fn require(&self, id: TaskId) -> Result<&Task> {
        self.get(id).ok_or(Error::TaskNotFound(id))
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn selection(&self) -> ViewSelection {
        self.selection
    }

    /// Switch between all tasks and completed tasks
    pub fn set_view(&mut self, mode: ViewMode) {
        self.set_selection(ViewSelection {
            mode,
            ..self.selection
        });
    }

    /// Change the status dropdown
    pub fn set_status_filter(&mut self, status_filter: StatusFilter) {
        self.set_selection(ViewSelection {
            status_filter,
            ..self.selection
        });
    }

    fn set_selection(&mut self, selection: ViewSelection) {
        if selection == self.selection {
            return;
        }
        debug!(mode = %selection.mode, filter = %selection.status_filter, "View changed");
        self.selection = selection;
        self.emit(StoreEvent::SelectionChanged(selection));
    }

    /// Tasks the current selection shows, ordered by due date
    pub fn visible_tasks(&self) -> Vec<Task> {
        project(&self.tasks, &self.selection)
    }

    /// Snapshot of the board for rendering
    pub fn board(&self) -> Board {
        Board::new(&self.tasks, self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskCategory, TaskPriority, TaskStatus};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fields(title: &str, due: &str) -> TaskFields {
        TaskFields::new(title, due.parse().unwrap())
    }

    #[test]
    fn test_add_task() {
        let mut store = TaskStore::new();
        let task = store.add_task(fields("Test task", "2025-07-01").with_description("A test"));

        assert_eq!(task.title, "Test task");
        assert_eq!(task.description, "A test");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(task.id), Some(&task));
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut store = TaskStore::new();
        let ids: Vec<TaskId> = (0..50)
            .map(|i| store.add_task(fields(&format!("Task {}", i), "2025-07-01")).id)
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_ids_continue_after_seed() {
        let mut store = TaskStore::with_seed_tasks();
        let task = store.add_task(fields("New", "2025-07-01"));
        assert!(task.id > TaskId(3));
    }

    #[test]
    fn test_from_tasks_rejects_duplicate_ids() {
        let tasks = vec![
            Task::from_fields(TaskId(7), fields("a", "2025-07-01")),
            Task::from_fields(TaskId(7), fields("b", "2025-07-02")),
        ];
        match TaskStore::from_tasks(tasks) {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("7")),
            other => panic!("Expected InvalidInput error, got: {:?}", other),
        }
    }

    #[test]
    fn test_from_tasks_keeps_order() {
        let store = TaskStore::from_tasks(seed_tasks()).unwrap();
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_after_max_id_does_not_overflow() {
        let top = Task::from_fields(TaskId(u64::MAX), fields("top", "2025-07-01"));
        let mut store = TaskStore::from_tasks(vec![top]).unwrap();

        let first = store.add_task(fields("after top", "2025-07-02")).id;
        let second = store.add_task(fields("after that", "2025-07-03")).id;

        assert_eq!(first, TaskId(1));
        assert_eq!(second, TaskId(2));
        assert_eq!(store.len(), 3);
        assert!(store.delete_task(TaskId(u64::MAX)).is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_task() {
        let mut store = TaskStore::new();
        let task = store.add_task(fields("Original title", "2025-07-01"));

        let replacement = fields("Updated title", "2025-08-01")
            .with_status(TaskStatus::InProgress)
            .with_priority(TaskPriority::High)
            .with_category(TaskCategory::Design);
        assert!(store.update_task(task.id, replacement.clone()));

        let updated = store.get(task.id).unwrap();
        assert_eq!(updated.id, task.id);
        assert_eq!(updated.fields(), replacement);
    }

    #[test]
    fn test_update_nonexistent_task_is_noop() {
        let mut store = TaskStore::with_seed_tasks();
        let before = store.tasks().to_vec();

        assert!(!store.update_task(TaskId(999), fields("Ghost", "2025-07-01")));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_delete_task() {
        let mut store = TaskStore::with_seed_tasks();

        let deleted = store.delete_task(TaskId(2));
        assert_eq!(deleted.map(|t| t.id), Some(TaskId(2)));
        let remaining: Vec<u64> = store.tasks().iter().map(|t| t.id.0).collect();
        assert_eq!(remaining, vec![1, 3]);

        // Delete again should be a no-op
        assert!(store.delete_task(TaskId(2)).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_require_missing_task() {
        let store = TaskStore::new();
        match store.require(TaskId(1)) {
            Err(Error::TaskNotFound(id)) => assert_eq!(id, TaskId(1)),
            other => panic!("Expected TaskNotFound error, got: {:?}", other),
        }
    }

    #[test]
    fn test_selection_changes() {
        let mut store = TaskStore::with_seed_tasks();
        store.set_view(ViewMode::CompletedOnly);
        store.set_status_filter(StatusFilter::Only(TaskStatus::Completed));

        let selection = store.selection();
        assert_eq!(selection.mode, ViewMode::CompletedOnly);
        assert_eq!(selection.status_filter, StatusFilter::Only(TaskStatus::Completed));
        assert_eq!(store.visible_tasks().len(), 1);
    }

    #[test]
    fn test_listeners_see_applied_changes() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut store = TaskStore::new();
        let sink = Rc::clone(&events);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let task = store.add_task(fields("Watched", "2025-07-01"));
        store.update_task(task.id, fields("Watched", "2025-07-02"));
        store.update_task(TaskId(1), fields("Missing", "2025-07-02"));
        store.set_view(ViewMode::CompletedOnly);
        store.set_view(ViewMode::CompletedOnly);
        store.delete_task(task.id);
        store.delete_task(task.id);

        let events = events.borrow();
        assert_eq!(events.len(), 4);
        assert!(matches!(&events[0], StoreEvent::Added(t) if t.id == task.id));
        assert!(matches!(&events[1], StoreEvent::Updated(t) if t.due_date.to_string() == "2025-07-02"));
        assert!(matches!(&events[2], StoreEvent::SelectionChanged(s) if s.mode == ViewMode::CompletedOnly));
        assert!(matches!(&events[3], StoreEvent::Deleted(t) if t.id == task.id));
    }
}
