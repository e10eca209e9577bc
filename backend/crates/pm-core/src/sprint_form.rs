//! Submitted sprint form values and the checks run before anything is sent.

use crate::{CoreError, CoreResult, NewSprint};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MAX_TITLE_LENGTH: usize = 200;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintForm {
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub ignore_weekends: bool,
}

impl SprintForm {
    /// Required fields and basic ordering. Project bounds and overlaps are the
    /// date range validator's job.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<NewSprint> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(validation("Sprint title cannot be empty", "title"));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(validation(
                &format!("Sprint title cannot exceed {} characters", MAX_TITLE_LENGTH),
                "title",
            ));
        }

        let date_start = self
            .date_start
            .ok_or_else(|| validation("Start date is required", "date_start"))?;
        let date_end = self
            .date_end
            .ok_or_else(|| validation("End date is required", "date_end"))?;

        if date_start > date_end {
            return Err(validation(
                "Start date cannot be later than end date.",
                "date_start",
            ));
        }

        let description = self
            .description
            .as_ref()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(NewSprint {
            project_id: self.project_id,
            title: title.to_string(),
            description,
            date_start,
            date_end,
            ignore_weekends: self.ignore_weekends,
        })
    }
}

#[track_caller]
fn validation(message: &str, field: &str) -> CoreError {
    CoreError::Validation {
        message: message.to_string(),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}
