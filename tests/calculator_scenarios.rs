use crabcalc::engine::{
    formatted, Calculator, CalculatorState, Input, Operator, DIVIDE_BY_ZERO_MESSAGE,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Starts from a cleared calculator and applies every input in order.
fn after(inputs: &[Input]) -> Calculator {
    let mut calc = Calculator::new();
    calc.clear();
    for input in inputs {
        calc.apply(*input);
    }
    calc
}

fn digits(text: &str) -> Vec<Input> {
    text.chars()
        .map(|c| match c {
            '.' => Input::DecimalPoint,
            d => Input::digit(d.to_digit(10).unwrap() as u8).unwrap(),
        })
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn fresh_digits_concatenate() {
    for text in ["7", "42", "3.14159", "1234567890123456", "98765.4321"] {
        assert_eq!(after(&digits(text)).display_text(), text);
    }
}

#[test]
fn formatting_examples() {
    assert_eq!(formatted(2.0), "2");
    assert_eq!(formatted(2.5), "2.5");
    assert_eq!(formatted(0.1), "0.1");
    assert_eq!(formatted(-3.0), "-3");
}

#[test]
fn five_plus_three() {
    let calc = after(&[
        Input::Digit(5),
        Input::Operator(Operator::Add),
        Input::Digit(3),
        Input::Equals,
    ]);
    assert_eq!(calc.display_text(), "8");
    assert_eq!(calc.calculation_label_text(), "");
}

#[test]
fn division_by_zero_and_recovery() {
    let mut calc = after(&[
        Input::Digit(1),
        Input::Operator(Operator::Divide),
        Input::Digit(0),
        Input::Equals,
    ]);
    assert_eq!(calc.display_text(), DIVIDE_BY_ZERO_MESSAGE);
    assert_eq!(calc.display_text(), "Can't divide by 0");
    assert_eq!(calc.state(), CalculatorState::ExceptionFound);

    calc.digit(7);
    assert_eq!(calc.display_text(), "7");
}

#[test]
fn percentage_of_four() {
    let calc = after(&[Input::Digit(4), Input::Percentage]);
    assert_eq!(calc.display_text(), "0.04");
}

#[test]
fn sign_toggle_twice() {
    let mut calc = after(&[Input::Digit(9), Input::SignToggle]);
    assert_eq!(calc.display_text(), "-9");
    calc.sign_toggle();
    assert_eq!(calc.display_text(), "9");
}

#[test]
fn second_equals_is_noop() {
    let mut calc = after(&[
        Input::Digit(6),
        Input::Operator(Operator::Multiply),
        Input::Digit(7),
        Input::Equals,
    ]);
    assert_eq!(calc.display_text(), "42");
    assert!(calc.equals().is_none());
    assert_eq!(calc.display_text(), "42");
    assert_eq!(calc.state(), CalculatorState::CalculationComplete);
}

#[test]
fn sixteen_digit_limit() {
    let mut calc = after(&digits("123456789012345"));
    calc.digit(6);
    assert_eq!(calc.display_text().len(), 16);
    calc.digit(7);
    assert_eq!(calc.display_text().len(), 16);
}

#[test]
fn label_tracks_first_operand() {
    let mut calc = after(&digits("2.5"));
    calc.operator(Operator::Subtract);
    assert_eq!(calc.calculation_label_text(), "2.5 −");
    assert_eq!(calc.display_text(), "0");
    calc.digit(1);
    assert_eq!(calc.calculation_label_text(), "2.5 −");
    calc.equals();
    assert_eq!(calc.display_text(), "1.5");
}

#[test]
fn result_feeds_next_operation() {
    let mut calc = after(&[
        Input::Digit(5),
        Input::Operator(Operator::Add),
        Input::Digit(3),
        Input::Equals,
        Input::Operator(Operator::Multiply),
        Input::Digit(2),
        Input::Equals,
    ]);
    assert_eq!(calc.display_text(), "16");
    calc.clear();
    assert_eq!(calc.display_text(), "0");
    assert_eq!(calc.state(), CalculatorState::CalculationComplete);
}

#[test]
fn digit_after_result_starts_new_number() {
    let mut calc = after(&[
        Input::Digit(5),
        Input::Operator(Operator::Add),
        Input::Digit(3),
        Input::Equals,
        Input::Digit(2),
    ]);
    assert_eq!(calc.display_text(), "2");
    assert_eq!(calc.state(), CalculatorState::EnteringFirstOperand);
    calc.operator(Operator::Add);
    calc.digit(1);
    calc.equals();
    assert_eq!(calc.display_text(), "3");
}
