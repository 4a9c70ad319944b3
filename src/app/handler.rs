use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::engine::{Input, Operator};
use crate::ui::{keypad, layout};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.terminal_size = (width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Char('t') => {
            state.show_tape = !state.show_tape;
            state.dirty = true;
            vec![]
        }
        _ => match key_to_input(&key) {
            Some(input) => press(state, input),
            None => vec![],
        },
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let (width, height) = state.terminal_size;
    let app_layout = layout::compute_layout(Rect::new(0, 0, width, height), state.show_tape);
    match keypad::button_at(app_layout.keypad, mouse.column, mouse.row) {
        Some(input) => press(state, input),
        None => vec![],
    }
}

/// Keyboard shortcut for each calculator button.
pub fn key_to_input(key: &KeyEvent) -> Option<Input> {
    match key.code {
        KeyCode::Char(c @ '0'..='9') => Some(Input::Digit(c as u8 - b'0')),
        KeyCode::Char('.') | KeyCode::Char(',') => Some(Input::DecimalPoint),
        KeyCode::Char('+') => Some(Input::Operator(Operator::Add)),
        KeyCode::Char('-') => Some(Input::Operator(Operator::Subtract)),
        KeyCode::Char('*') | KeyCode::Char('x') => Some(Input::Operator(Operator::Multiply)),
        KeyCode::Char('/') => Some(Input::Operator(Operator::Divide)),
        KeyCode::Enter | KeyCode::Char('=') => Some(Input::Equals),
        KeyCode::Esc | KeyCode::Delete | KeyCode::Char('c') => Some(Input::Clear),
        KeyCode::Char('n') | KeyCode::Char('_') | KeyCode::F(9) => Some(Input::SignToggle),
        KeyCode::Char('%') => Some(Input::Percentage),
        _ => None,
    }
}

/// Forwards one button press to the calculator and records the result.
pub fn press(state: &mut AppState, input: Input) -> Vec<Action> {
    state.last_input = Some(input);
    state.status_message = None;
    state.dirty = true;

    let Some(evaluation) = state.calculator.apply(input) else {
        return vec![];
    };
    debug!(result = %evaluation.describe(), "evaluated");
    state.record_evaluation(&evaluation);

    if evaluation.is_error() {
        state.status_message = Some("Press any digit to start over".to_string());
        if state.config.behavior.bell_on_error {
            return vec![Action::Bell];
        }
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_keys(state: &mut AppState, keys: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        for c in keys.chars() {
            let code = if c == '\n' { KeyCode::Enter } else { KeyCode::Char(c) };
            actions.extend(handle_event(state, key(code)));
        }
        actions
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_key_mapping() {
        let k = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_to_input(&k(KeyCode::Char('7'))), Some(Input::Digit(7)));
        assert_eq!(key_to_input(&k(KeyCode::Char(','))), Some(Input::DecimalPoint));
        assert_eq!(
            key_to_input(&k(KeyCode::Char('x'))),
            Some(Input::Operator(Operator::Multiply))
        );
        assert_eq!(
            key_to_input(&k(KeyCode::Char('/'))),
            Some(Input::Operator(Operator::Divide))
        );
        assert_eq!(key_to_input(&k(KeyCode::Enter)), Some(Input::Equals));
        assert_eq!(key_to_input(&k(KeyCode::Esc)), Some(Input::Clear));
        assert_eq!(key_to_input(&k(KeyCode::F(9))), Some(Input::SignToggle));
        assert_eq!(key_to_input(&k(KeyCode::Char('%'))), Some(Input::Percentage));
        assert_eq!(key_to_input(&k(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_typing_a_calculation() {
        let mut state = AppState::new(AppConfig::default());
        let actions = type_keys(&mut state, "12*3\n");
        assert!(actions.is_empty());
        assert_eq!(state.calculator.display_text(), "36");
        assert_eq!(state.tape.len(), 1);
        assert_eq!(state.tape[0].text, "12 × 3 = 36");
        assert_eq!(state.last_input, Some(Input::Equals));
    }

    #[test]
    fn test_divide_by_zero_rings_bell_when_enabled() {
        let mut config = AppConfig::default();
        config.behavior.bell_on_error = true;
        let mut state = AppState::new(config);
        let actions = type_keys(&mut state, "1/0=");
        assert_eq!(actions, vec![Action::Bell]);
        assert!(state.tape[0].is_error);
        assert!(state.status_message.is_some());

        type_keys(&mut state, "7");
        assert_eq!(state.calculator.display_text(), "7");
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_divide_by_zero_silent_by_default() {
        let mut state = AppState::new(AppConfig::default());
        assert!(type_keys(&mut state, "1/0=").is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_plain_c_clears() {
        let mut state = AppState::new(AppConfig::default());
        type_keys(&mut state, "42c");
        assert_eq!(state.calculator.display_text(), "0");
    }

    #[test]
    fn test_toggle_tape() {
        let mut state = AppState::new(AppConfig::default());
        assert!(state.show_tape);
        type_keys(&mut state, "t");
        assert!(!state.show_tape);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut state = AppState::new(AppConfig::default());
        let release = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(release)));
        assert_eq!(state.calculator.display_text(), "0");
    }

    #[test]
    fn test_click_keypad_button() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(80, 24)));
        let app_layout = layout::compute_layout(Rect::new(0, 0, 80, 24), state.show_tape);
        let (_, seven) = keypad::button_rects(app_layout.keypad)
            .into_iter()
            .find(|(input, _)| *input == Input::Digit(7))
            .unwrap();
        handle_event(&mut state, click(seven.x + 1, seven.y + 1));
        assert_eq!(state.calculator.display_text(), "7");
        assert_eq!(state.last_input, Some(Input::Digit(7)));
    }

    #[test]
    fn test_click_outside_keypad_ignored() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(80, 24)));
        handle_event(&mut state, click(1, 0));
        assert_eq!(state.calculator.display_text(), "0");
        assert_eq!(state.last_input, None);
    }
}
