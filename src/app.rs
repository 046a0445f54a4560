use crate::domain::{Priority, Task, TaskForm, TaskPatch, UiMode, ViewMode};
use crate::notifications::AlertPermission;
use crate::persistence::{save_state, schedule_file, PersistedState};
use crate::scheduler::{DesktopSink, ReminderScheduler};
use crate::store::ScheduleStore;
use anyhow::Result;
use chrono::{Local, Months, NaiveDate, NaiveTime, TimeZone};
use uuid::Uuid;

/// Number of fields the input form cycles through
pub const FORM_FIELD_COUNT: usize = 7;

/// Input form state for adding or editing a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    pub description: String,
    pub date: String,  // YYYY-MM-DD
    pub start: String, // HH:MM
    pub end: String,   // HH:MM
    pub priority: Priority,
    pub category: String,
    pub editing_field: usize, // 0 = title, 1 = description, 2 = date, 3 = start, 4 = end, 5 = priority, 6 = category
    pub editing_id: Option<Uuid>, // Some when editing an existing task
}

impl InputFormState {
    /// Fresh form for a new task on the given date
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: date.format("%Y-%m-%d").to_string(),
            start: "09:00".to_string(),
            end: "10:00".to_string(),
            priority: Priority::default(),
            category: String::new(),
            editing_field: 0,
            editing_id: None,
        }
    }

    /// Form pre-filled from an existing task
    pub fn for_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            date: task.start_time.format("%Y-%m-%d").to_string(),
            start: task.start_time.format("%H:%M").to_string(),
            end: task.end_time.format("%H:%M").to_string(),
            priority: task.priority,
            category: task.category.clone().unwrap_or_default(),
            editing_field: 0,
            editing_id: Some(task.id),
        }
    }

    /// The text buffer the cursor is in (None on the priority field)
    pub fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.editing_field {
            0 => Some(&mut self.title),
            1 => Some(&mut self.description),
            2 => Some(&mut self.date),
            3 => Some(&mut self.start),
            4 => Some(&mut self.end),
            6 => Some(&mut self.category),
            _ => None,
        }
    }

    /// Parse the buffers into a creation payload. Declines (returns
    /// None) on a blank title or unparseable date/time; an inverted
    /// start/end pair is accepted as-is.
    pub fn parse(&self) -> Option<TaskForm> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let start = NaiveTime::parse_from_str(self.start.trim(), "%H:%M").ok()?;
        let end = NaiveTime::parse_from_str(self.end.trim(), "%H:%M").ok()?;
        let start_time = Local.from_local_datetime(&date.and_time(start)).earliest()?;
        let end_time = Local.from_local_datetime(&date.and_time(end)).earliest()?;

        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        let category = match self.category.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        Some(TaskForm {
            title: title.to_string(),
            description,
            start_time,
            end_time,
            priority: self.priority,
            category,
        })
    }
}

/// Main application state: the store plus ephemeral UI state
pub struct AppState {
    pub store: ScheduleStore,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub permission: AlertPermission,
    pub scheduler: ReminderScheduler,
}

impl AppState {
    pub fn new(store: ScheduleStore, permission: AlertPermission) -> Self {
        Self {
            store,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            permission,
            scheduler: ReminderScheduler::new(),
        }
    }

    /// The task list shown for the selected date
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.tasks_for_date(self.store.selected_date)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.selected_index).copied()
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let count = self.visible_tasks().len();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    /// Keep selection inside the visible list after a mutation
    fn clamp_selection(&mut self) {
        let count = self.visible_tasks().len();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    /// Open the form for a new task on the selected date
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::for_date(self.store.selected_date));
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the form pre-filled from the selected task
    pub fn start_edit_task(&mut self) {
        if let Some(task) = self.selected_task() {
            self.input_form = Some(InputFormState::for_task(task));
            self.ui_mode = UiMode::EditingTask;
        }
    }

    /// Submit the form. An unparseable form stays open; a valid one
    /// creates or patches the task and returns to normal mode.
    pub fn submit_input_form(&mut self) {
        let Some(form_state) = &self.input_form else {
            return;
        };
        let Some(form) = form_state.parse() else {
            return;
        };

        match form_state.editing_id {
            Some(id) => {
                self.store.update_task(
                    id,
                    TaskPatch {
                        title: Some(form.title),
                        description: Some(form.description),
                        start_time: Some(form.start_time),
                        end_time: Some(form.end_time),
                        priority: Some(form.priority),
                        category: Some(form.category),
                        ..Default::default()
                    },
                );
            }
            None => {
                self.store.add_task(form);
            }
        }

        self.input_form = None;
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// Close the form without applying it
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            if let Some(text) = form.active_text_mut() {
                text.push(c);
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            if let Some(text) = form.active_text_mut() {
                text.pop();
            }
        }
    }

    pub fn input_form_next_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % FORM_FIELD_COUNT;
        }
    }

    pub fn input_form_prev_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + FORM_FIELD_COUNT - 1) % FORM_FIELD_COUNT;
        }
    }

    /// Cycle priority while the form cursor is on the priority field
    pub fn input_form_cycle_priority(&mut self) {
        if let Some(form) = &mut self.input_form {
            if form.editing_field == 5 {
                form.priority = form.priority.next();
            }
        }
    }

    /// Delete the selected task (and its reminders)
    pub fn delete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            self.store.delete_task(id);
            self.clamp_selection();
        }
    }

    /// Toggle completion on the selected task
    pub fn toggle_selected_complete(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            self.store.toggle_task_complete(id);
        }
    }

    pub fn cycle_view_mode(&mut self) {
        let next = self.store.view_mode.next();
        self.store.set_view_mode(next);
    }

    pub fn go_to_today(&mut self) {
        self.store.set_selected_date(Local::now().date_naive());
        self.clamp_selection();
    }

    /// Move the selected date forward or back: one month in the month
    /// view, one day otherwise
    pub fn step_date(&mut self, forward: bool) {
        let current = self.store.selected_date;
        let next = match self.store.view_mode {
            ViewMode::Month => {
                let step = Months::new(1);
                if forward {
                    current.checked_add_months(step)
                } else {
                    current.checked_sub_months(step)
                }
                .unwrap_or(current)
            }
            _ => {
                let step = chrono::Duration::days(1);
                if forward {
                    current + step
                } else {
                    current - step
                }
            }
        };
        self.store.set_selected_date(next);
        self.clamp_selection();
    }

    /// Run a reminder pass if one is due
    pub fn poll_reminders(&mut self) {
        let mut sink = DesktopSink;
        self.scheduler
            .poll(&mut self.store, self.permission, &mut sink);
    }

    pub fn needs_save(&self) -> bool {
        self.store.dirty
    }

    /// Write the store to schedule.json
    pub fn save(&mut self) -> Result<()> {
        let path = schedule_file()?;
        save_state(path, &PersistedState::from_store(&self.store))?;
        self.store.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, TimeZone};

    fn app_with_tasks_on(date: NaiveDate, titles: &[&str]) -> AppState {
        let mut store = ScheduleStore::new();
        for (i, title) in titles.iter().enumerate() {
            let start = Local
                .from_local_datetime(&date.and_hms_opt(9 + i as u32, 0, 0).unwrap())
                .unwrap();
            store.add_task(TaskForm {
                title: title.to_string(),
                description: None,
                start_time: start,
                end_time: start + Duration::hours(1),
                priority: Priority::Medium,
                category: None,
            });
        }
        store.set_selected_date(date);
        let mut app = AppState::new(store, AlertPermission::Default);
        app.store.dirty = false;
        app
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_form_parse_valid() {
        let mut form = InputFormState::for_date(date());
        form.title = "Standup".to_string();
        form.start = "09:30".to_string();
        form.end = "10:00".to_string();
        form.category = "  work  ".to_string();

        let parsed = form.parse().unwrap();
        assert_eq!(parsed.title, "Standup");
        assert_eq!(parsed.start_time.date_naive(), date());
        assert_eq!(parsed.start_time.format("%H:%M").to_string(), "09:30");
        assert_eq!(parsed.category, Some("work".to_string()));
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn test_form_declines_blank_title() {
        let mut form = InputFormState::for_date(date());
        form.title = "   ".to_string();
        assert!(form.parse().is_none());
    }

    #[test]
    fn test_form_declines_bad_time() {
        let mut form = InputFormState::for_date(date());
        form.title = "Standup".to_string();
        form.start = "9 o'clock".to_string();
        assert!(form.parse().is_none());
    }

    #[test]
    fn test_submit_adds_task_and_closes_form() {
        let mut app = app_with_tasks_on(date(), &[]);
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "Standup".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.store.tasks.len(), 1);
        assert_eq!(app.store.tasks[0].title, "Standup");
        assert!(app.needs_save());
    }

    #[test]
    fn test_submit_keeps_invalid_form_open() {
        let mut app = app_with_tasks_on(date(), &[]);
        app.start_add_task();
        app.submit_input_form(); // blank title

        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());
        assert!(app.store.tasks.is_empty());
    }

    #[test]
    fn test_edit_patches_existing_task() {
        let mut app = app_with_tasks_on(date(), &["Draft"]);
        let id = app.store.tasks[0].id;

        app.start_edit_task();
        assert_eq!(app.ui_mode, UiMode::EditingTask);
        if let Some(form) = &mut app.input_form {
            form.title = "Final".to_string();
            form.priority = Priority::High;
        }
        app.submit_input_form();

        assert_eq!(app.store.tasks.len(), 1);
        assert_eq!(app.store.tasks[0].id, id);
        assert_eq!(app.store.tasks[0].title, "Final");
        assert_eq!(app.store.tasks[0].priority, Priority::High);
        // Editing never grows the reminder list
        assert_eq!(app.store.notifications.len(), 1);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = app_with_tasks_on(date(), &["One", "Two"]);
        app.selected_index = 1;
        app.delete_selected();
        assert_eq!(app.store.tasks.len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app_with_tasks_on(date(), &["One", "Two"]);
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_step_date_by_view_mode() {
        let mut app = app_with_tasks_on(date(), &[]);

        app.store.set_view_mode(ViewMode::Day);
        app.store.set_selected_date(date());
        app.step_date(true);
        assert_eq!(
            app.store.selected_date,
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
        );

        app.store.set_view_mode(ViewMode::Month);
        app.store.set_selected_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        app.step_date(true);
        // Month steps clamp to the last valid day
        assert_eq!(app.store.selected_date.month(), 2);
        assert_eq!(app.store.selected_date.day(), 28);

        app.step_date(false);
        assert_eq!(app.store.selected_date.month(), 1);
        assert_eq!(app.store.selected_date.day(), 28);
    }

    #[test]
    fn test_toggle_selected_complete() {
        let mut app = app_with_tasks_on(date(), &["One"]);
        app.toggle_selected_complete();
        assert!(app.store.tasks[0].completed);
    }

    #[test]
    fn test_form_priority_cycles_only_on_its_field() {
        let mut app = app_with_tasks_on(date(), &[]);
        app.start_add_task();

        app.input_form_cycle_priority();
        assert_eq!(app.input_form.as_ref().unwrap().priority, Priority::Medium);

        for _ in 0..5 {
            app.input_form_next_field();
        }
        app.input_form_cycle_priority();
        assert_eq!(app.input_form.as_ref().unwrap().priority, Priority::High);
    }
}
