use crate::app::state::AppState;
use crate::engine::CalculatorState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" crabcalc ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let calc = &state.calculator;
    let display_style = if calc.state() == CalculatorState::ExceptionFound {
        Theme::error_message()
    } else {
        Theme::display_text()
    };

    let lines = vec![
        Line::from(Span::styled(
            calc.calculation_label_text(),
            Theme::calculation_label(),
        )),
        Line::from(Span::styled(calc.display_text(), display_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
