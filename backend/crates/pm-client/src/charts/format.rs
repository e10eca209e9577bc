//! Number formatting used by chart labels and tooltips.

use std::time::Duration;

/// Two decimals, dropped entirely when they round to zero (`1`, `1.50`).
pub fn format_number(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    match rounded.strip_suffix(".00") {
        Some("-0") => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}

/// Always two decimals (`12.50`).
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

/// Integer with thousands separators (`3,600`).
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Human readable duration (`1h 30m`). Negative input counts as zero.
pub fn format_duration(seconds: i64) -> String {
    let seconds = u64::try_from(seconds).unwrap_or(0);
    humantime::format_duration(Duration::from_secs(seconds)).to_string()
}
