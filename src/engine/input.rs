use super::operator::Operator;
use std::fmt;
use thiserror::Error;

/// A single button press understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    SignToggle,
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a decimal digit")]
pub struct InvalidDigit(pub u8);

impl Input {
    /// Builds a digit press, rejecting values above 9.
    pub fn digit(value: u8) -> Result<Self, InvalidDigit> {
        if value <= 9 {
            Ok(Input::Digit(value))
        } else {
            Err(InvalidDigit(value))
        }
    }

    /// Keypad caption.
    pub fn caption(&self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::DecimalPoint => ".".to_string(),
            Input::Operator(op) => op.symbol().to_string(),
            Input::Equals => "=".to_string(),
            Input::Clear => "C".to_string(),
            Input::SignToggle => "±".to_string(),
            Input::Percentage => "%".to_string(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.caption())
    }
}
