use crate::app::{AppState, InputFormState};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding or editing a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if form.editing_id.is_some() {
            " Edit Task "
        } else {
            " Add Task "
        };

        let mut lines = Vec::new();
        lines.push(Line::raw(""));

        push_text_field(&mut lines, "Title:", &form.title, form.editing_field == 0);
        push_text_field(
            &mut lines,
            "Description:",
            &form.description,
            form.editing_field == 1,
        );
        push_text_field(
            &mut lines,
            "Date (YYYY-MM-DD):",
            &form.date,
            form.editing_field == 2,
        );
        push_text_field(&mut lines, "Start (HH:MM):", &form.start, form.editing_field == 3);
        push_text_field(&mut lines, "End (HH:MM):", &form.end, form.editing_field == 4);
        push_priority_field(&mut lines, form);
        push_text_field(&mut lines, "Category:", &form.category, form.editing_field == 6);

        // Instructions
        lines.push(Line::raw(
            "Tab to switch fields  ·  Enter to submit  ·  Esc to cancel",
        ));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

/// Push a labeled text field, with a block cursor when focused
fn push_text_field(lines: &mut Vec<Line<'static>>, label: &str, value: &str, editing: bool) {
    let label_text = if editing {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    };
    lines.push(Line::raw(label_text));

    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));
}

/// Push the priority field, cycled with ↑/↓ instead of typed
fn push_priority_field(lines: &mut Vec<Line<'static>>, form: &InputFormState) {
    let editing = form.editing_field == 5;
    let label = if editing {
        "Priority: (↑/↓ to change)"
    } else {
        "Priority:"
    };
    lines.push(Line::raw(label));

    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(form.priority.badge().to_string(), modal_title_style()),
        if editing {
            Span::styled(" ◂▸", modal_title_style())
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));
}
