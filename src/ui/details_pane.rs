use crate::app::AppState;
use crate::domain::{format_date_time, format_time, Priority};
use crate::ui::styles::{
    border_style, default_style, done_style, high_priority_style, low_priority_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(task) = app.selected_task() else {
        let empty = Paragraph::new("No task selected").block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Details ", title_style())),
        );
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();

    // Title
    lines.push(Line::from(vec![
        Span::styled("Title:    ", title_style()),
        Span::raw(task.title.clone()),
    ]));

    // Time window
    lines.push(Line::from(vec![
        Span::styled("Time:     ", title_style()),
        Span::raw(format!(
            "{} – {}",
            format_time(task.start_time),
            format_time(task.end_time)
        )),
    ]));

    // Priority
    let badge_style = match task.priority {
        Priority::High => high_priority_style(),
        Priority::Low => low_priority_style(),
        Priority::Medium => default_style(),
    };
    lines.push(Line::from(vec![
        Span::styled("Priority: ", title_style()),
        Span::styled(task.priority.to_tag(), badge_style),
    ]));

    // Category
    lines.push(Line::from(vec![
        Span::styled("Category: ", title_style()),
        Span::raw(task.category.clone().unwrap_or_else(|| "(none)".to_string())),
    ]));

    // Status
    let (status, status_style) = if task.completed {
        ("done", done_style())
    } else {
        ("pending", default_style())
    };
    lines.push(Line::from(vec![
        Span::styled("Status:   ", title_style()),
        Span::styled(status, status_style),
    ]));
    lines.push(Line::raw(""));

    // Description
    match &task.description {
        Some(description) if !description.trim().is_empty() => {
            lines.push(Line::from(Span::styled("Description:", title_style())));
            for text_line in description.lines() {
                lines.push(Line::raw(format!("  {}", text_line)));
            }
        }
        _ => {
            lines.push(Line::from(Span::styled(
                "Description: (empty)",
                default_style(),
            )));
        }
    }
    lines.push(Line::raw(""));

    // Timestamps
    lines.push(Line::from(vec![
        Span::styled("Created:  ", title_style()),
        Span::raw(format_date_time(task.created_at)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Updated:  ", title_style()),
        Span::raw(format_date_time(task.updated_at)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Details ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
