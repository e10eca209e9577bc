use crate::Sprint;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sprint DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintDto {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub ignore_weekends: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Sprint> for SprintDto {
    fn from(s: Sprint) -> Self {
        Self {
            id: s.id,
            project_id: s.project_id,
            title: s.title,
            description: s.description,
            date_start: s.date_start,
            date_end: s.date_end,
            ignore_weekends: s.ignore_weekends,
            created_at: s.created_at.timestamp(),
            updated_at: s.updated_at.timestamp(),
        }
    }
}
