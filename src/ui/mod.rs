mod display;
pub mod keypad;
pub mod layout;
mod status_bar;
mod tape;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.show_tape);

    display::render(frame, app_layout.display, state);
    keypad::render(frame, app_layout.keypad, state);
    if let Some(tape_area) = app_layout.tape {
        tape::render(frame, tape_area, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
