use crate::notifications::{self, AlertPermission};
use crate::store::ScheduleStore;
use crate::ticker;
use chrono::{Duration, Local};
use std::time::Instant;
use uuid::Uuid;

/// How far before its scheduled time a reminder becomes due
const DUE_WINDOW_MINUTES: i64 = 5;

/// Where a due reminder is surfaced
pub trait AlertSink {
    fn emit(&mut self, title: &str, message: &str);
}

/// Sink that hands alerts to the desktop
pub struct DesktopSink;

impl AlertSink for DesktopSink {
    fn emit(&mut self, title: &str, message: &str) {
        notifications::emit_alert(title, message);
    }
}

/// Fire every unsent reminder whose scheduled time is at most five
/// minutes away. Already-due reminders in the past are left alone; a
/// window the process slept through is simply missed. When permission
/// is not granted the whole pass is skipped and nothing is marked sent.
pub fn run_reminder_pass(
    store: &mut ScheduleStore,
    permission: AlertPermission,
    sink: &mut dyn AlertSink,
) {
    if permission != AlertPermission::Granted {
        return;
    }

    let now = Local::now();
    let window = Duration::minutes(DUE_WINDOW_MINUTES);

    let due: Vec<(Uuid, String, String)> = store
        .notifications
        .iter()
        .filter(|n| !n.sent)
        .filter(|n| {
            let delta = n.scheduled_for - now;
            delta > Duration::zero() && delta <= window
        })
        .map(|n| (n.id, n.title.clone(), n.message.clone()))
        .collect();

    for (id, title, message) in due {
        sink.emit(&title, &message);
        store.mark_notification_sent(id);
    }
}

/// Gates reminder passes to the poll interval. The event loop ticks
/// every 250ms; the first call runs a pass immediately, later calls
/// no-op until a minute has gone by.
pub struct ReminderScheduler {
    last_check: Option<Instant>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self { last_check: None }
    }

    pub fn poll(
        &mut self,
        store: &mut ScheduleStore,
        permission: AlertPermission,
        sink: &mut dyn AlertSink,
    ) {
        let due = match self.last_check {
            None => true,
            Some(at) => at.elapsed() >= ticker::reminder_poll_interval(),
        };
        if !due {
            return;
        }
        self.last_check = Some(Instant::now());
        run_reminder_pass(store, permission, sink);
    }
}

impl Default for ReminderScheduler {
    fn default() -> Self {
        Self::new()
    }
}
