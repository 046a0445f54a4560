use crate::app::AppState;
use crate::domain::{format_date, format_time, week_of, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, selected_style, title_style, today_style,
};
use chrono::{Local, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the week view, Monday-first, one section per day
pub fn render_week_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let selected = app.store.selected_date;
    let today = Local::now().date_naive();
    let week = week_of(selected);

    let mut lines = Vec::new();

    for day in week {
        let tasks = app.store.tasks_for_date(day);
        lines.push(day_header(day, selected, today, tasks.len()));

        for task in &tasks {
            lines.push(task_row(task));
        }
        lines.push(Line::raw(""));
    }

    let title = format!(" Week of {} ", format_date(week[0]));
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

/// Header line for one day of the week
fn day_header(
    day: NaiveDate,
    selected: NaiveDate,
    today: NaiveDate,
    count: usize,
) -> Line<'static> {
    let style = if day == selected {
        selected_style()
    } else if day == today {
        today_style()
    } else {
        title_style()
    };

    let label = format!(" {} ({}) ", day.format("%a %b %d"), count);
    Line::from(Span::styled(label, style))
}

/// Indented row for one task within its day
fn task_row(task: &Task) -> Line<'static> {
    let style = if task.completed {
        done_style()
    } else {
        default_style()
    };

    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let text = format!(
        "   {} {}  {}",
        checkbox,
        format_time(task.start_time),
        task.title
    );
    Line::from(Span::styled(text, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, TaskForm};
    use chrono::{Duration, TimeZone};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_day_header_highlights_selected() {
        let selected = ymd(2025, 6, 4);
        let header = day_header(selected, selected, ymd(2025, 6, 2), 2);
        assert_eq!(header.spans[0].style, selected_style());
        assert!(header.spans[0].content.contains("Wed Jun 04"));
        assert!(header.spans[0].content.contains("(2)"));
    }

    #[test]
    fn test_task_row_shows_start_time() {
        let start = Local.with_ymd_and_hms(2025, 6, 4, 14, 30, 0).unwrap();
        let task = Task::new(TaskForm {
            title: "Review".to_string(),
            description: None,
            start_time: start,
            end_time: start + Duration::hours(1),
            priority: Priority::Medium,
            category: None,
        });

        let row = task_row(&task);
        assert!(row.spans[0].content.contains("[ ] 2:30 PM"));
        assert!(row.spans[0].content.contains("Review"));
    }
}
