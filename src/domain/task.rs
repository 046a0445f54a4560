use super::enums::Priority;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled, time-boxed task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID for internal references
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,
    /// When the task begins
    pub start_time: DateTime<Local>,
    /// When the task ends
    pub end_time: DateTime<Local>,
    /// Whether the task has been completed
    pub completed: bool,
    /// Importance level
    pub priority: Priority,
    /// Optional free-form category label
    #[serde(default)]
    pub category: Option<String>,
    /// When the task was created
    pub created_at: DateTime<Local>,
    /// When the task was last modified
    pub updated_at: DateTime<Local>,
}

impl Task {
    pub fn new(form: TaskForm) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4(),
            title: form.title,
            description: form.description,
            start_time: form.start_time,
            end_time: form.end_time,
            completed: false,
            priority: form.priority,
            category: form.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a patch, overwriting only the fields it carries
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self.updated_at = Local::now();
    }
}

/// Payload for creating a task
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub priority: Priority,
    pub category: Option<String>,
}

/// Partial update for an existing task; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start_time: Option<DateTime<Local>>,
    pub end_time: Option<DateTime<Local>>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<Option<String>>,
}

/// A pending or delivered reminder for a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique ID for internal references
    pub id: Uuid,
    /// The task this reminder belongs to
    pub task_id: Uuid,
    /// Alert title (the task title at creation time)
    pub title: String,
    /// Alert body
    pub message: String,
    /// When the reminder should fire
    pub scheduled_for: DateTime<Local>,
    /// Whether the alert has been delivered
    pub sent: bool,
    /// When the reminder was created
    pub created_at: DateTime<Local>,
}

impl Notification {
    pub fn new(task_id: Uuid, title: String, scheduled_for: DateTime<Local>) -> Self {
        let message = format!("Time to start: {}", title);
        Self {
            id: Uuid::new_v4(),
            task_id,
            title,
            message,
            scheduled_for,
            sent: false,
            created_at: Local::now(),
        }
    }
}

/// A named day plan. Part of the persisted document layout; no operation
/// currently populates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_form() -> TaskForm {
        TaskForm {
            title: "Write proposal".to_string(),
            description: Some("First draft".to_string()),
            start_time: Local.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
            end_time: Local.with_ymd_and_hms(2025, 6, 2, 10, 30, 0).unwrap(),
            priority: Priority::High,
            category: Some("work".to_string()),
        }
    }

    #[test]
    fn test_task_new() {
        let task = Task::new(sample_form());
        assert_eq!(task.title, "Write proposal");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_apply_patch_overwrites_only_given_fields() {
        let mut task = Task::new(sample_form());
        let original_start = task.start_time;

        task.apply_patch(TaskPatch {
            title: Some("Review proposal".to_string()),
            priority: Some(Priority::Low),
            ..Default::default()
        });

        assert_eq!(task.title, "Review proposal");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.start_time, original_start);
        assert_eq!(task.description, Some("First draft".to_string()));
    }

    #[test]
    fn test_apply_patch_can_clear_optional_fields() {
        let mut task = Task::new(sample_form());
        task.apply_patch(TaskPatch {
            description: Some(None),
            category: Some(None),
            ..Default::default()
        });
        assert_eq!(task.description, None);
        assert_eq!(task.category, None);
    }

    #[test]
    fn test_apply_patch_refreshes_updated_at() {
        let mut task = Task::new(sample_form());
        let before = task.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(5));
        task.apply_patch(TaskPatch::default());
        assert!(task.updated_at > before);
    }

    #[test]
    fn test_notification_message_derived_from_title() {
        let task = Task::new(sample_form());
        let notification =
            Notification::new(task.id, task.title.clone(), task.start_time);
        assert_eq!(notification.task_id, task.id);
        assert_eq!(notification.message, "Time to start: Write proposal");
        assert!(!notification.sent);
    }
}
