use crate::Project;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            date_start: p.date_start,
            date_end: p.date_end,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
