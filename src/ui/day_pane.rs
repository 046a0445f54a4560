use crate::app::AppState;
use crate::domain::{format_date, format_time, time_slots, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the day view: 24 hourly slots, each task shown at the slot
/// containing its start time
pub fn render_day_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.visible_tasks();

    let mut lines = Vec::new();
    for slot in time_slots() {
        let slot_tasks: Vec<&&Task> = tasks
            .iter()
            .filter(|t| t.start_time.format("%H:00").to_string() == slot.value)
            .collect();

        let mut spans = vec![
            Span::styled(format!("{:>9} ", slot.label), hint_style()),
            Span::styled("│ ", hint_style()),
        ];

        for (idx, task) in slot_tasks.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(task_span(task));
        }

        lines.push(Line::from(spans));
    }

    let title = format!(" {} ", format_date(app.store.selected_date));
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

fn task_span(task: &Task) -> Span<'static> {
    let style = if task.completed {
        done_style()
    } else {
        default_style()
    };
    let text = format!(
        "{} – {} {}",
        format_time(task.start_time),
        format_time(task.end_time),
        task.title
    );
    Span::styled(text, style)
}
