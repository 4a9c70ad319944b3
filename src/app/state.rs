use crate::config::AppConfig;
use crate::engine::{Calculator, Evaluation, Input};
use chrono::Local;

/// A completed calculation shown in the tape panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TapeEntry {
    pub timestamp: String,
    pub text: String,
    pub is_error: bool,
}

pub struct AppState {
    pub config: AppConfig,
    pub calculator: Calculator,
    pub tape: Vec<TapeEntry>,
    pub show_tape: bool,
    /// Last keypad button pressed, highlighted until the next press.
    pub last_input: Option<Input>,
    pub terminal_size: (u16, u16),
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let show_tape = config.ui.show_tape;
        Self {
            config,
            calculator: Calculator::new(),
            tape: Vec::new(),
            show_tape,
            last_input: None,
            terminal_size: (0, 0),
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Appends an evaluation to the tape, dropping the oldest entries past
    /// the configured limit.
    pub fn record_evaluation(&mut self, evaluation: &Evaluation) {
        let entry = TapeEntry {
            timestamp: Local::now()
                .format(&self.config.ui.timestamp_format)
                .to_string(),
            text: evaluation.describe(),
            is_error: evaluation.is_error(),
        };
        self.tape.push(entry);
        let max = self.config.ui.max_tape_entries;
        if self.tape.len() > max {
            let excess = self.tape.len() - max;
            self.tape.drain(..excess);
        }
    }

    pub fn status_line(&self) -> String {
        match &self.status_message {
            Some(msg) => msg.clone(),
            None => "q quit · Esc clear · n ± · t tape".to_string(),
        }
    }
}
