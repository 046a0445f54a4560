use crate::app::AppState;
use crate::domain::{format_date, format_time, Priority, Task};
use crate::ui::styles::{
    border_style, category_style, default_style, done_style, high_priority_style,
    low_priority_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list for the selected date
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.visible_tasks();

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else if task.completed {
                done_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(
        " Tasks — {} ({}) ",
        format_date(app.store.selected_date),
        tasks.len()
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single line for a task
/// Format: [x] 9:00 AM – 9:30 AM  Standup [HIGH] [work]
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    spans.push(Span::raw(checkbox.to_string()));

    spans.push(Span::raw(format!(
        "{} – {}  ",
        format_time(task.start_time),
        format_time(task.end_time)
    )));

    spans.push(Span::raw(task.title.clone()));

    let badge_style = match task.priority {
        Priority::High => high_priority_style(),
        Priority::Low => low_priority_style(),
        Priority::Medium => default_style(),
    };
    spans.push(Span::raw(" ".to_string()));
    spans.push(Span::styled(task.priority.badge().to_string(), badge_style));

    if let Some(category) = &task.category {
        spans.push(Span::raw(" ".to_string()));
        spans.push(Span::styled(format!("[{}]", category), category_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskForm;
    use chrono::{Duration, Local, TimeZone};

    fn sample_task(title: &str, priority: Priority, category: Option<&str>) -> Task {
        let start = Local.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        Task::new(TaskForm {
            title: title.to_string(),
            description: None,
            start_time: start,
            end_time: start + Duration::minutes(30),
            priority,
            category: category.map(|c| c.to_string()),
        })
    }

    #[test]
    fn test_create_task_line() {
        let task = sample_task("Standup", Priority::High, Some("work"));
        let line_str = format!("{:?}", create_task_line(&task));

        assert!(line_str.contains("[ ] "));
        assert!(line_str.contains("9:00 AM – 9:30 AM"));
        assert!(line_str.contains("Standup"));
        assert!(line_str.contains("[HIGH]"));
        assert!(line_str.contains("[work]"));
    }

    #[test]
    fn test_completed_task_is_checked() {
        let mut task = sample_task("Standup", Priority::Medium, None);
        task.completed = true;

        let line_str = format!("{:?}", create_task_line(&task));
        assert!(line_str.contains("[x] "));
        assert!(!line_str.contains("[work]"));
    }
}
