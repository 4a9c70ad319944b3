use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub tape: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_tape: bool) -> AppLayout {
    // Main vertical split: display | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Label + display inside a border
            Constraint::Min(10),   // Keypad and tape
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let display = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    if !show_tape {
        return AppLayout {
            display,
            keypad: content,
            tape: None,
            status_bar,
        };
    }

    // Horizontal: keypad | gap | tape
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(24),    // Keypad
            Constraint::Length(32), // Tape
        ])
        .split(content);

    AppLayout {
        display,
        keypad: h_chunks[0],
        tape: Some(h_chunks[1]),
        status_bar,
    }
}
