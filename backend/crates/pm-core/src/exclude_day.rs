//! Exclude days must fall strictly inside their sprint.

use crate::{CoreError, format_date};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExcludeDayError {
    #[error("Exclude date must be between {min} and {max}.")]
    OutsideSprint { min: NaiveDate, max: NaiveDate },
}

impl ExcludeDayError {
    pub fn message(&self, date_format: &str) -> String {
        match self {
            Self::OutsideSprint { min, max } => format!(
                "Exclude date must be between {} and {}.",
                format_date(*min, date_format),
                format_date(*max, date_format)
            ),
        }
    }
}

impl From<ExcludeDayError> for CoreError {
    #[track_caller]
    fn from(e: ExcludeDayError) -> Self {
        CoreError::Validation {
            message: e.to_string(),
            field: Some("day".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Days a sprint can exclude: the first and last sprint day are never allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcludeDayWindow {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl ExcludeDayWindow {
    pub fn for_sprint(date_start: NaiveDate, date_end: NaiveDate) -> Self {
        Self {
            min: date_start.succ_opt().unwrap_or(date_start),
            max: date_end.pred_opt().unwrap_or(date_end),
        }
    }

    /// Empty when the sprint is shorter than three days.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn check_day(&self, day: NaiveDate) -> Result<(), ExcludeDayError> {
        if day < self.min || day > self.max {
            return Err(ExcludeDayError::OutsideSprint {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
