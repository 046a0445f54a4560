use crate::app::AppState;
use crate::domain::month_grid;
use crate::ui::styles::{
    border_style, default_style, muted_style, selected_style, title_style, today_style,
};
use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Render the month calendar grid, Sunday-first
pub fn render_month_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let selected = app.store.selected_date;
    let today = Local::now().date_naive();
    let grid = month_grid(selected.year(), selected.month());

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    // Weekday header
    let header: Vec<Span> = WEEKDAY_HEADER
        .iter()
        .map(|name| Span::styled(format!("{:>3}  ", name), title_style()))
        .collect();
    lines.push(Line::from(header));
    lines.push(Line::raw(""));

    for week in &grid {
        let mut spans = Vec::new();
        for day in week {
            let has_tasks = !app.store.tasks_for_date(*day).is_empty();
            spans.push(day_cell(*day, selected, today, has_tasks));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    let title = format!(" {} ", selected.format("%B %Y"));
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

/// One day cell, marked with `*` when it has tasks. Days outside the
/// selected month are dimmed.
fn day_cell(
    day: NaiveDate,
    selected: NaiveDate,
    today: NaiveDate,
    has_tasks: bool,
) -> Span<'static> {
    let marker = if has_tasks { '*' } else { ' ' };
    let text = format!("{:>3}{} ", day.day(), marker);

    let style = if day == selected {
        selected_style()
    } else if day == today {
        today_style()
    } else if day.month() != selected.month() {
        muted_style()
    } else {
        default_style()
    };

    Span::styled(text, style)
}
