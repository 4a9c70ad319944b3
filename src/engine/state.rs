use std::fmt;

/// Where the calculator is in the entry cycle.
///
/// The "waiting" tags mean the next digit starts a fresh number. Each of them
/// has a matching "entering" tag it moves to once that first digit arrives,
/// see [`CalculatorState::after_clearing_display`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CalculatorState {
    EnteringFirstOperand,
    EnteringSecondOperand,
    #[default]
    CalculationComplete,
    ExceptionFound,
    WaitingForSecondOperand,
}

impl CalculatorState {
    pub fn is_waiting_for_operand(self) -> bool {
        matches!(
            self,
            CalculatorState::WaitingForSecondOperand | CalculatorState::ExceptionFound
        )
    }

    pub fn is_displaying_first_operand(self) -> bool {
        matches!(
            self,
            CalculatorState::EnteringFirstOperand | CalculatorState::CalculationComplete
        )
    }

    pub fn is_displaying_second_operand(self) -> bool {
        matches!(
            self,
            CalculatorState::EnteringSecondOperand | CalculatorState::WaitingForSecondOperand
        )
    }

    /// True when the next digit replaces the display instead of extending
    /// it: the waiting states plus a finished result.
    pub fn starts_fresh_number(self) -> bool {
        self.is_waiting_for_operand() || self == CalculatorState::CalculationComplete
    }

    /// State to move to when the display is wiped for fresh input.
    pub fn after_clearing_display(self) -> Self {
        match self {
            CalculatorState::WaitingForSecondOperand => CalculatorState::EnteringSecondOperand,
            CalculatorState::ExceptionFound | CalculatorState::CalculationComplete => {
                CalculatorState::EnteringFirstOperand
            }
            other => other,
        }
    }

    /// Short upper-case name for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            CalculatorState::EnteringFirstOperand => "FIRST",
            CalculatorState::EnteringSecondOperand => "SECOND",
            CalculatorState::CalculationComplete => "READY",
            CalculatorState::ExceptionFound => "ERROR",
            CalculatorState::WaitingForSecondOperand => "WAITING",
        }
    }
}

impl fmt::Display for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
