use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid date '{value}' in {field}: expected YYYY-MM-DD {location}")]
    InvalidDate {
        value: String,
        field: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidDate { field, .. } => Some(field),
        }
    }

    /// Message without the location suffix, suitable for users.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidDate { value, field, .. } => {
                format!("Invalid date '{}' in {}", value, field)
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
