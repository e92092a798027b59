/// Renders an integer as text that is itself valid input to the grammar.
///
/// Negative values mirror the unary-negation production, `(- N)` with `N` the
/// non-negative magnitude; zero and positive values render as plain decimal.
/// `unsigned_abs` keeps the magnitude well defined even for `i64::MIN`.
///
/// # Example
/// ```
/// use simplisp::interpreter::formatter::format_value;
///
/// assert_eq!(format_value(14), "14");
/// assert_eq!(format_value(-5), "(- 5)");
/// assert_eq!(format_value(0), "0");
/// ```
#[must_use]
pub fn format_value(value: i64) -> String {
    if value < 0 {
        format!("(- {})", value.unsigned_abs())
    } else {
        value.to_string()
    }
}
