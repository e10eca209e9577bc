use crate::ExcludeSprintDay;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Exclude day DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludeSprintDayDto {
    pub id: i64,
    pub sprint_id: i64,
    pub day: NaiveDate,
    pub description: Option<String>,
    pub created_at: i64,
}

impl From<ExcludeSprintDay> for ExcludeSprintDayDto {
    fn from(d: ExcludeSprintDay) -> Self {
        Self {
            id: d.id,
            sprint_id: d.sprint_id,
            day: d.day,
            description: d.description,
            created_at: d.created_at.timestamp(),
        }
    }
}
