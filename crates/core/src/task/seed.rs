//! Sample tasks loaded when a session starts

use chrono::NaiveDate;

use super::model::{Task, TaskCategory, TaskFields, TaskId, TaskPriority, TaskStatus};

fn seed(id: u64, title: &str, description: &str, due: (i32, u32, u32)) -> (TaskId, TaskFields) {
    let (year, month, day) = due;
    let due_date = NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date");
    (TaskId(id), TaskFields::new(title, due_date).with_description(description))
}

/// One task per status, with ids 1 to 3
pub fn seed_tasks() -> Vec<Task> {
    let (id, fields) = seed(
        1,
        "Launch new feature",
        "Deploy the AI-powered analytics dashboard with real-time insights",
        (2025, 6, 15),
    );
    let launch = Task::from_fields(
        id,
        fields
            .with_status(TaskStatus::InProgress)
            .with_priority(TaskPriority::High)
            .with_category(TaskCategory::Work),
    );

    let (id, fields) = seed(
        2,
        "Design system update",
        "Refresh brand colors and create new component library",
        (2025, 6, 10),
    );
    let design = Task::from_fields(
        id,
        fields
            .with_status(TaskStatus::Pending)
            .with_priority(TaskPriority::Medium)
            .with_category(TaskCategory::Design),
    );

    let (id, fields) = seed(
        3,
        "Learn Three.js",
        "Complete the 3D web development course and build a portfolio project",
        (2025, 5, 28),
    );
    let learn = Task::from_fields(
        id,
        fields
            .with_status(TaskStatus::Completed)
            .with_priority(TaskPriority::Low)
            .with_category(TaskCategory::Learning),
    );

    vec![launch, design, learn]
}
