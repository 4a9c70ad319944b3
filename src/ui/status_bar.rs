use crate::app::state::AppState;
use crate::engine::CalculatorState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let calc_state = state.calculator.state();
    let state_color = match calc_state {
        CalculatorState::ExceptionFound => Color::Red,
        CalculatorState::WaitingForSecondOperand => Theme::ACCENT_AMBER,
        _ => Color::Green,
    };

    let mut parts: Vec<Span> = vec![
        Span::styled(
            format!(" [{}] ", calc_state),
            Style::default().fg(state_color).bg(Color::DarkGray),
        ),
        Span::styled(format!(" {} ", state.status_line()), Theme::status_bar()),
    ];

    let tape_name = if state.show_tape { "TAPE" } else { "" };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + tape_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    if !tape_name.is_empty() {
        parts.push(Span::styled(
            format!(" [{}] ", tape_name),
            Style::default().fg(Theme::ACCENT_TEAL).bg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
