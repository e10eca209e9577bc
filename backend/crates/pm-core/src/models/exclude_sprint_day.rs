use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A day inside a sprint that does not count as a work day (holiday etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeSprintDay {
    pub id: i64,
    pub sprint_id: i64,
    pub day: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExcludeSprintDay {
    pub sprint_id: i64,
    pub day: NaiveDate,
    pub description: Option<String>,
}
