//! Calculator engine: a synchronous state machine fed one button press at a
//! time, producing a display string and a calculation label.
//!
//! ```text
//! Calculator + Input  →  apply()  →  Calculator' (+ Evaluation on equals)
//! ```

pub mod calculator;
pub mod format;
pub mod input;
pub mod operator;
pub mod state;

pub use calculator::{Calculator, Evaluation, Outcome, DIVIDE_BY_ZERO_MESSAGE, MAX_INPUT_LEN};
pub use format::{formatted, parse_operand};
pub use input::{Input, InvalidDigit};
pub use operator::{Operator, ParseOperatorError};
pub use state::CalculatorState;
