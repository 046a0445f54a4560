pub mod day_pane;
pub mod details_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod month_pane;
pub mod styles;
pub mod week_pane;

use crate::app::AppState;
use crate::domain::ViewMode;
use day_pane::render_day_pane;
use details_pane::render_details_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use month_pane::render_month_pane;
use ratatui::Frame;
use week_pane::render_week_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, app, layout.keybindings_area);

    // Render the calendar pane for the active view
    match app.store.view_mode {
        ViewMode::Day => render_day_pane(f, app, layout.calendar_area),
        ViewMode::Week => render_week_pane(f, app, layout.calendar_area),
        ViewMode::Month => render_month_pane(f, app, layout.calendar_area),
    }

    // Render task list and details for the selected date
    render_list_pane(f, app, layout.list_area);
    render_details_pane(f, app, layout.details_area);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
