pub mod calendar;
pub mod enums;
pub mod task;

pub use calendar::{
    format_date, format_date_time, format_time, month_grid, time_slots, week_of, TimeSlot,
};
pub use enums::{Priority, UiMode, ViewMode};
pub use task::{Notification, Schedule, Task, TaskForm, TaskPatch};
