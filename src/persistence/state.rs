use crate::domain::{Notification, Schedule, Task, ViewMode};
use crate::store::ScheduleStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Why a persisted document could not be used
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The single persisted document, stored as schedule.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub view_mode: ViewMode,
    #[serde(default = "today")]
    pub selected_date: NaiveDate,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            schedules: Vec::new(),
            notifications: Vec::new(),
            view_mode: ViewMode::default(),
            selected_date: today(),
        }
    }
}

impl PersistedState {
    /// Snapshot a store for writing
    pub fn from_store(store: &ScheduleStore) -> Self {
        Self {
            tasks: store.tasks.clone(),
            schedules: store.schedules.clone(),
            notifications: store.notifications.clone(),
            view_mode: store.view_mode,
            selected_date: store.selected_date,
        }
    }

    /// Rehydrate the store this document was written from
    pub fn into_store(self) -> ScheduleStore {
        ScheduleStore::from_parts(
            self.tasks,
            self.notifications,
            self.schedules,
            self.view_mode,
            self.selected_date,
        )
    }
}

/// Load the persisted document. A missing file is the normal first-run
/// case and yields the default state; an unreadable or corrupt file is
/// an error the caller decides how to handle.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<PersistedState, StateError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(PersistedState::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| StateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let state = serde_json::from_str(&content).map_err(|source| StateError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(state)
}

/// Load the persisted document, starting over with the empty state
/// (and a stderr warning) when it cannot be used
pub fn load_or_default<P: AsRef<Path>>(path: P) -> PersistedState {
    match load_state(path) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Warning: {}; starting with an empty schedule", err);
            PersistedState::default()
        }
    }
}

/// Save the document via atomic write
pub fn save_state<P: AsRef<Path>>(path: P, state: &PersistedState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, TaskForm};
    use chrono::{Duration, TimeZone};
    use tempfile::tempdir;

    fn sample_store() -> ScheduleStore {
        let mut store = ScheduleStore::new();
        let start = Local.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        store.add_task(TaskForm {
            title: "Standup".to_string(),
            description: Some("Daily sync".to_string()),
            start_time: start,
            end_time: start + Duration::minutes(30),
            priority: Priority::High,
            category: Some("work".to_string()),
        });
        store
    }

    #[test]
    fn test_load_nonexistent_state() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("schedule.json");

        let state = load_state(&path).unwrap();
        assert!(state.tasks.is_empty());
        assert!(state.notifications.is_empty());
        assert_eq!(state.view_mode, ViewMode::Month);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("schedule.json");

        let store = sample_store();
        save_state(&path, &PersistedState::from_store(&store)).unwrap();

        let loaded = load_state(&path).unwrap().into_store();
        assert_eq!(loaded.tasks.len(), 1);
        assert_eq!(loaded.tasks[0].title, "Standup");
        assert_eq!(loaded.tasks[0].priority, Priority::High);
        assert_eq!(loaded.notifications.len(), 1);
        assert_eq!(loaded.notifications[0].task_id, loaded.tasks[0].id);
        assert_eq!(loaded.view_mode, store.view_mode);
        assert_eq!(loaded.selected_date, store.selected_date);
        assert!(!loaded.dirty);
    }

    #[test]
    fn test_corrupt_document_is_a_parse_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("schedule.json");
        std::fs::write(&path, "{ not json").unwrap();

        match load_state(&path) {
            Err(StateError::Parse { .. }) => {}
            other => panic!("expected parse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_or_default_recovers_from_corrupt_document() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("schedule.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let state = load_or_default(&path);
        assert!(state.tasks.is_empty());
        assert_eq!(state.view_mode, ViewMode::Month);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("schedule.json");
        std::fs::write(&path, r#"{"tasks": []}"#).unwrap();

        let state = load_state(&path).unwrap();
        assert!(state.notifications.is_empty());
        assert!(state.schedules.is_empty());
        assert_eq!(state.view_mode, ViewMode::Month);
        assert_eq!(state.selected_date, Local::now().date_naive());
    }
}
