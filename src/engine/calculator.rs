use super::format::{formatted, parse_operand};
use super::input::Input;
use super::operator::{calculate, Operator};
use super::state::CalculatorState;
use tracing::{debug, warn};

/// Longest display the user can type into.
pub const MAX_INPUT_LEN: usize = 16;

/// Shown in place of a result when dividing by zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Can't divide by 0";

/// What an equals press computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub first: f64,
    pub operator: Option<Operator>,
    pub second: f64,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    DivideByZero,
}

impl Evaluation {
    pub fn is_error(&self) -> bool {
        self.outcome == Outcome::DivideByZero
    }

    /// One-line summary such as `5 + 3 = 8`.
    pub fn describe(&self) -> String {
        let op = self.operator.map(Operator::symbol).unwrap_or("?");
        let result = match self.outcome {
            Outcome::Value(v) => formatted(v),
            Outcome::DivideByZero => DIVIDE_BY_ZERO_MESSAGE.to_string(),
        };
        format!(
            "{} {} {} = {}",
            formatted(self.first),
            op,
            formatted(self.second),
            result
        )
    }
}

/// The calculator session: operands, pending operator and the two output
/// strings. Every input runs to completion before the next one.
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    operator: Option<Operator>,
    first_operand: f64,
    second_operand: f64,
    display: String,
    label: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            state: CalculatorState::CalculationComplete,
            operator: None,
            first_operand: 0.0,
            second_operand: 0.0,
            display: "0".to_string(),
            label: String::new(),
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn calculation_label_text(&self) -> &str {
        &self.label
    }

    pub fn state(&self) -> CalculatorState {
        self.state
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn second_operand(&self) -> f64 {
        self.second_operand
    }

    /// Feeds one button press. Returns the evaluation when the press was an
    /// equals that actually computed something.
    pub fn apply(&mut self, input: Input) -> Option<Evaluation> {
        debug!(?input, state = ?self.state, display = %self.display, "calculator input");
        match input {
            Input::Digit(d) => {
                self.digit(d);
                None
            }
            Input::DecimalPoint => {
                self.decimal_point();
                None
            }
            Input::Operator(op) => {
                self.operator(op);
                None
            }
            Input::Equals => self.equals(),
            Input::Clear => {
                self.clear();
                None
            }
            Input::SignToggle => {
                self.sign_toggle();
                None
            }
            Input::Percentage => {
                self.percentage();
                None
            }
        }
    }

    pub fn digit(&mut self, d: u8) {
        match Input::digit(d) {
            Ok(_) => self.push_digit(char::from(b'0' + d)),
            Err(e) => warn!("ignoring digit press: {}", e),
        }
    }

    pub fn decimal_point(&mut self) {
        if !self.can_append_to_display() {
            return;
        }
        if self.state.starts_fresh_number() {
            self.display = "0".to_string();
            self.state = self.state.after_clearing_display();
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn operator(&mut self, op: Operator) {
        self.store_display_value();
        self.state = CalculatorState::WaitingForSecondOperand;
        self.operator = Some(op);
        self.label = format!("{} {}", formatted(self.first_operand), op.symbol());
        self.display = "0".to_string();
    }

    pub fn equals(&mut self) -> Option<Evaluation> {
        self.store_display_value();

        if !self.state.is_displaying_second_operand() {
            return None;
        }

        let first = self.first_operand;
        let second = self.second_operand;
        let outcome = if self.is_division_by_zero() {
            self.display = DIVIDE_BY_ZERO_MESSAGE.to_string();
            self.first_operand = 0.0;
            self.state = CalculatorState::ExceptionFound;
            Outcome::DivideByZero
        } else {
            let result = calculate(first, self.operator, second);
            self.display = formatted(result);
            self.first_operand = result;
            self.state = CalculatorState::CalculationComplete;
            Outcome::Value(result)
        };
        self.reset_calculation_fields();

        Some(Evaluation {
            first,
            operator: self.operator,
            second,
            outcome,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn sign_toggle(&mut self) {
        if let Some(value) = parse_operand(&self.display) {
            self.show_operand(-value);
        }
    }

    pub fn percentage(&mut self) {
        if let Some(value) = parse_operand(&self.display) {
            self.show_operand(value / 100.0);
        }
    }

    /// Typed input is capped; results and error messages are always
    /// replaceable.
    fn can_append_to_display(&self) -> bool {
        self.display.chars().count() < MAX_INPUT_LEN || self.state.starts_fresh_number()
    }

    fn should_clear_display(&self) -> bool {
        self.display == "0" || self.state.starts_fresh_number()
    }

    fn push_digit(&mut self, c: char) {
        if !self.can_append_to_display() {
            return;
        }
        if self.should_clear_display() {
            self.display.clear();
            self.state = self.state.after_clearing_display();
        }
        self.display.push(c);
    }

    fn store_display_value(&mut self) {
        if let Some(value) = parse_operand(&self.display) {
            self.set_operand(value);
        }
    }

    fn set_operand(&mut self, value: f64) {
        if self.state.is_displaying_first_operand() {
            self.first_operand = value;
        } else {
            self.second_operand = value;
        }
    }

    fn show_operand(&mut self, value: f64) {
        self.set_operand(value);
        self.display = formatted(value);
    }

    fn is_division_by_zero(&self) -> bool {
        self.operator == Some(Operator::Divide) && self.second_operand == 0.0
    }

    fn reset_calculation_fields(&mut self) {
        self.label.clear();
        self.second_operand = 0.0;
    }
}
