//! On-screen keypad. The same geometry drives rendering and mouse
//! hit-testing so a click always lands on the button that was drawn there.

use crate::app::state::AppState;
use crate::engine::{CalculatorState, Input, Operator};
use crate::ui::theme::Theme;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const COLUMNS: u16 = 4;

/// Buttons per row with their column span.
const ROWS: [&[(Input, u16)]; 5] = [
    &[
        (Input::Clear, 1),
        (Input::SignToggle, 1),
        (Input::Percentage, 1),
        (Input::Operator(Operator::Divide), 1),
    ],
    &[
        (Input::Digit(7), 1),
        (Input::Digit(8), 1),
        (Input::Digit(9), 1),
        (Input::Operator(Operator::Multiply), 1),
    ],
    &[
        (Input::Digit(4), 1),
        (Input::Digit(5), 1),
        (Input::Digit(6), 1),
        (Input::Operator(Operator::Subtract), 1),
    ],
    &[
        (Input::Digit(1), 1),
        (Input::Digit(2), 1),
        (Input::Digit(3), 1),
        (Input::Operator(Operator::Add), 1),
    ],
    &[(Input::Digit(0), 2), (Input::DecimalPoint, 1), (Input::Equals, 1)],
];

/// Screen rectangle of every button inside `area`.
pub fn button_rects(area: Rect) -> Vec<(Input, Rect)> {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(ROWS.iter().map(|_| Constraint::Ratio(1, ROWS.len() as u32)))
        .split(area);

    let mut buttons = Vec::new();
    for (row, row_area) in ROWS.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                row.iter()
                    .map(|(_, span)| Constraint::Ratio(*span as u32, COLUMNS as u32)),
            )
            .split(*row_area);
        for ((input, _), cell) in row.iter().zip(cells.iter()) {
            buttons.push((*input, *cell));
        }
    }
    buttons
}

/// Button under a terminal cell, if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Input> {
    let position = Position::new(column, row);
    button_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(input, _)| input)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let pending = match state.calculator.state() {
        CalculatorState::WaitingForSecondOperand => state.calculator.pending_operator(),
        _ => None,
    };

    for (input, rect) in button_rects(area) {
        let highlighted = state.last_input == Some(input)
            || matches!(input, Input::Operator(op) if Some(op) == pending);
        let style = if highlighted {
            Theme::key_pressed()
        } else {
            key_style(input)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border());
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        // Center the caption vertically as well as horizontally.
        let caption_area = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: inner.height.min(1),
            ..inner
        };
        let caption = Paragraph::new(input.caption())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(caption, caption_area);
    }
}

fn key_style(input: Input) -> Style {
    match input {
        Input::Digit(_) | Input::DecimalPoint => Theme::key_digit(),
        Input::Operator(_) | Input::Equals => Theme::key_operator(),
        Input::Clear | Input::SignToggle | Input::Percentage => Theme::key_function(),
    }
}
