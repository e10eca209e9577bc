//! Calendar date formatting and parsing.
//!
//! Users pick their own display pattern (strftime syntax). A broken pattern
//! must never take a request down, so formatting falls back to ISO dates.

use crate::{CoreError, CoreResult};

use std::fmt::Write;
use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;

/// Storage and wire format for calendar days.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display pattern used when a user has not chosen one.
pub const DEFAULT_DATE_FORMAT: &str = ISO_DATE_FORMAT;

/// Format `date` with a user supplied strftime `pattern`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format(ISO_DATE_FORMAT).to_string();
    }
    out
}

/// Parse an ISO `YYYY-MM-DD` date.
#[track_caller]
pub fn parse_date(value: &str, field: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| CoreError::InvalidDate {
        value: value.to_string(),
        field: field.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
