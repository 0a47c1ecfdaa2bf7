//! Common helper functions for output formatting.

/// Formats a numeric amount for display.
///
/// Integral values render without a trailing `.0` (the dataset's prices
/// and gas mileages are usually whole numbers); fractional values keep
/// their fraction.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
