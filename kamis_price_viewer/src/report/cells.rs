//! Formatting of individual table cells.

/// Placeholder for a horizon without an observation.
pub const NO_PRICE: &str = "-";

/// Formats an integer with `,` between groups of three digits (`12345` -> `"12,345"`).
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an optional horizon price; absent and zero both render as [`NO_PRICE`].
pub fn optional_price(value: Option<i64>) -> String {
    match value {
        Some(price) if price != 0 => group_thousands(price),
        _ => NO_PRICE.to_string(),
    }
}

/// Formats a percent change with a trailing `%` (`3.0` -> `"3%"`, `-1.5` -> `"-1.5%"`).
pub fn percent_change(value: f64) -> String {
    // -0.0 would otherwise print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}
