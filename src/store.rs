use crate::domain::{Notification, Schedule, Task, TaskForm, TaskPatch, ViewMode};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};
use uuid::Uuid;

/// Authoritative schedule state. All mutation goes through the methods
/// here; they set `dirty` so the shell knows a save is pending.
pub struct ScheduleStore {
    pub tasks: Vec<Task>,
    pub notifications: Vec<Notification>,
    pub schedules: Vec<Schedule>,
    pub view_mode: ViewMode,
    pub selected_date: NaiveDate,
    pub dirty: bool,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            notifications: Vec::new(),
            schedules: Vec::new(),
            view_mode: ViewMode::default(),
            selected_date: Local::now().date_naive(),
            dirty: false,
        }
    }

    /// Rebuild a store from persisted parts
    pub fn from_parts(
        tasks: Vec<Task>,
        notifications: Vec<Notification>,
        schedules: Vec<Schedule>,
        view_mode: ViewMode,
        selected_date: NaiveDate,
    ) -> Self {
        Self {
            tasks,
            notifications,
            schedules,
            view_mode,
            selected_date,
            dirty: false,
        }
    }

    /// Create a task from the form and schedule its reminder at the
    /// task's start time
    pub fn add_task(&mut self, form: TaskForm) -> &Task {
        let task = Task::new(form);
        let id = task.id;
        let scheduled_for = task.start_time;
        self.tasks.push(task);
        self.add_notification(id, scheduled_for);
        self.dirty = true;
        let idx = self.tasks.len() - 1;
        &self.tasks[idx]
    }

    /// Merge the patch into the matching task. The task's reminder keeps
    /// the start time it was created with, even when `start_time` moves.
    /// No-op when the id does not resolve.
    pub fn update_task(&mut self, id: Uuid, patch: TaskPatch) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.apply_patch(patch);
            self.dirty = true;
        }
    }

    /// Remove the task and every reminder attached to it. Idempotent.
    pub fn delete_task(&mut self, id: Uuid) {
        let before = self.tasks.len() + self.notifications.len();
        self.tasks.retain(|t| t.id != id);
        self.notifications.retain(|n| n.task_id != id);
        if self.tasks.len() + self.notifications.len() != before {
            self.dirty = true;
        }
    }

    /// Flip completion on the matching task. No-op when absent.
    pub fn toggle_task_complete(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            task.updated_at = Local::now();
            self.dirty = true;
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            self.view_mode = mode;
            self.dirty = true;
        }
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        if self.selected_date != date {
            self.selected_date = date;
            self.dirty = true;
        }
    }

    /// Schedule a reminder for the task. The alert text is derived from
    /// the task title at creation time. No-op when the task is unknown.
    pub fn add_notification(&mut self, task_id: Uuid, scheduled_for: DateTime<Local>) {
        if let Some(task) = self.tasks.iter().find(|t| t.id == task_id) {
            let notification = Notification::new(task_id, task.title.clone(), scheduled_for);
            self.notifications.push(notification);
            self.dirty = true;
        }
    }

    /// Mark a reminder as delivered. Idempotent; no-op when absent.
    pub fn mark_notification_sent(&mut self, id: Uuid) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            if !notification.sent {
                notification.sent = true;
                self.dirty = true;
            }
        }
    }

    /// Tasks whose start falls on the given local calendar date, in
    /// insertion order
    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.start_time.date_naive() == date)
            .collect()
    }

    /// Tasks whose start falls in `[start 00:00, (start + 6 days) 00:00]`,
    /// both ends inclusive
    pub fn tasks_for_week(&self, start: NaiveDate) -> Vec<&Task> {
        let (Some(window_start), Some(window_end)) = (
            start.and_hms_opt(0, 0, 0),
            (start + Duration::days(6)).and_hms_opt(0, 0, 0),
        ) else {
            return Vec::new();
        };
        self.tasks
            .iter()
            .filter(|t| {
                let at = t.start_time.naive_local();
                window_start <= at && at <= window_end
            })
            .collect()
    }

    /// Tasks whose start falls in the given month (1-based)
    pub fn tasks_for_month(&self, year: i32, month: u32) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.start_time.year() == year && t.start_time.month() == month)
            .collect()
    }
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new()
    }
}
