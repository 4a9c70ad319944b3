use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pending binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator {0:?}")]
pub struct ParseOperatorError(pub String);

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on the keypad and in the calculation label.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "x" | "X" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}

/// Evaluates a pending operation. No operator evaluates to zero.
pub fn calculate(lhs: f64, operator: Option<Operator>, rhs: f64) -> f64 {
    match operator {
        Some(op) => op.apply(lhs, rhs),
        None => 0.0,
    }
}
