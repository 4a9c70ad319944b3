//! Conversions between display text and operand values.

/// Digits kept after the decimal point before trimming.
pub const FRACTION_DIGITS: usize = 8;

/// Renders a value for the display: eight fraction digits, then trailing
/// zeros and a dangling decimal point trimmed away.
///
/// Overflowing or undefined results are shown as `inf`, `-inf` or `NaN`.
/// [`parse_operand`] reads those back, so they carry into the next
/// operation until the display is replaced or cleared.
pub fn formatted(value: f64) -> String {
    let fixed = format!("{:.*}", FRACTION_DIGITS, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    // Negative zero and values that round to it.
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Reads the display as a number. Text that isn't a number yields `None`.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
