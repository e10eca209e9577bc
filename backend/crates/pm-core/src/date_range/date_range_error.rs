use crate::{Boundary, CoreError, format_date};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use thiserror::Error;

/// Why a candidate sprint date was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    #[error("Start date cannot be later than end date.")]
    StartAfterEnd,

    #[error("End date cannot be before than start date.")]
    EndBeforeStart,

    #[error("{} date conflicts with project duration ({min} - {max}).", .boundary.label())]
    OutsideProject {
        boundary: Boundary,
        min: NaiveDate,
        max: NaiveDate,
    },

    #[error("{} date overlaps sprint '{title}' ({start} - {end}).", .boundary.label())]
    Overlaps {
        boundary: Boundary,
        sprint_id: i64,
        title: String,
        start: NaiveDate,
        end: NaiveDate,
    },
}

impl DateRangeError {
    pub fn boundary(&self) -> Boundary {
        match self {
            Self::StartAfterEnd => Boundary::Start,
            Self::EndBeforeStart => Boundary::End,
            Self::OutsideProject { boundary, .. } | Self::Overlaps { boundary, .. } => *boundary,
        }
    }

    /// Toast text with dates rendered in the user's format.
    pub fn message(&self, date_format: &str) -> String {
        match self {
            Self::StartAfterEnd | Self::EndBeforeStart => self.to_string(),
            Self::OutsideProject { boundary, min, max } => format!(
                "{label} date conflicts with project duration. {label} date must be between {min} and {max}.",
                label = boundary.label(),
                min = format_date(*min, date_format),
                max = format_date(*max, date_format),
            ),
            Self::Overlaps {
                boundary,
                title,
                start,
                end,
                ..
            } => format!(
                "{} date conflicts with sprint '{}' ({} - {}).",
                boundary.label(),
                title,
                format_date(*start, date_format),
                format_date(*end, date_format),
            ),
        }
    }
}

impl From<DateRangeError> for CoreError {
    #[track_caller]
    fn from(e: DateRangeError) -> Self {
        CoreError::Validation {
            field: Some(e.boundary().field().to_string()),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
