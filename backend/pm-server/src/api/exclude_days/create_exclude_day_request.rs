use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /ExcludeSprintDay/create`
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateExcludeDayRequest {
    pub sprint_id: i64,
    pub day: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}
