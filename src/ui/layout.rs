use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub calendar_area: Rect,
    pub list_area: Rect,
    pub details_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Calendar (60%) | right column (40%)
/// - Right column: Task list (60%) above Details (40%)
pub fn create_layout(area: Rect) -> MainLayout {
    // Split into top bar and main content
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let content_area = main_chunks[1];

    // Split content horizontally: calendar on left, tasks on right
    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Calendar pane
            Constraint::Percentage(40), // List + details column
        ])
        .split(content_area);

    let calendar_area = horizontal_split[0];

    // Split right column vertically: list above details
    let right_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Task list pane
            Constraint::Percentage(40), // Details pane
        ])
        .split(horizontal_split[1]);

    MainLayout {
        calendar_area,
        list_area: right_split[0],
        details_area: right_split[1],
        keybindings_area,
    }
}

/// Create centered modal area (for the task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Length(26),
            Constraint::Percentage(15),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert!(layout.calendar_area.height > 0);
        assert!(layout.list_area.height > 0);
        assert!(layout.details_area.height > 0);

        // Calendar sits left of the task column
        assert!(layout.calendar_area.x < layout.list_area.x);
        // List sits above details
        assert!(layout.list_area.y < layout.details_area.y);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert!(modal.height < area.height);
        assert_eq!(modal.height, 26);
    }
}
