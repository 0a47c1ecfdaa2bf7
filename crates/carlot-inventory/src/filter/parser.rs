//! Free-text filter-value parser.

/// Parses a raw text input into an optional numeric bound.
///
/// The input is trimmed, then scanned for the first maximal run of ASCII
/// digits, which is parsed as a base-10 integer. Signs and decimal points
/// are not part of the run: `"-5"` yields `5` and `"3.5"` yields `3`.
///
/// Returns `None` for empty input, input with no digits, or a digit run
/// too large for `i64` — malformed input always degrades to "no bound",
/// never an error. `"0"` parses to `Some(0)`, which is a real bound
/// distinct from the absent state.
///
/// # Example
///
/// ```
/// use carlot_inventory_rs::filter::parse_bound;
///
/// assert_eq!(parse_bound("2010"), Some(2010));
/// assert_eq!(parse_bound("  $12,000 or less "), Some(12));
/// assert_eq!(parse_bound("abc"), None);
/// assert_eq!(parse_bound(""), None);
/// assert_eq!(parse_bound("0"), Some(0));
/// ```
pub fn parse_bound(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let run = first_digit_run(trimmed)?;
    run.parse::<i64>().ok()
}

/// Returns the first maximal run of ASCII digits in the input.
fn first_digit_run(input: &str) -> Option<&str> {
    let start = input.find(|c: char| c.is_ascii_digit())?;
    let rest = &input[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
