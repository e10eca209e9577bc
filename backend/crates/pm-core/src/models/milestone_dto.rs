use crate::Milestone;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Milestone DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneDto {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub deadline: NaiveDate,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Milestone> for MilestoneDto {
    fn from(m: Milestone) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            title: m.title,
            description: m.description,
            deadline: m.deadline,
            created_at: m.created_at.timestamp(),
            updated_at: m.updated_at.timestamp(),
        }
    }
}
