use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Tape ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    // Newest entries stay at the bottom; older ones scroll off the top.
    let visible = block.inner(area).height as usize;
    let skip = state.tape.len().saturating_sub(visible);

    let items: Vec<ListItem> = if state.tape.is_empty() {
        vec![ListItem::new(Span::styled(
            " No calculations yet",
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        state
            .tape
            .iter()
            .skip(skip)
            .map(|entry| {
                let text_style = if entry.is_error {
                    Theme::error_message()
                } else {
                    Theme::tape_text()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", entry.timestamp), Theme::timestamp()),
                    Span::styled(entry.text.as_str(), text_style),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
