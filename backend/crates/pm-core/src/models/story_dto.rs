use crate::Story;

use serde::{Deserialize, Serialize};

/// Story DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryDto {
    pub id: i64,
    pub project_id: i64,
    pub sprint_id: Option<i64>,
    pub milestone_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub estimate: Option<f64>,
    pub priority: i64,
    pub is_done: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Story> for StoryDto {
    fn from(s: Story) -> Self {
        Self {
            id: s.id,
            project_id: s.project_id,
            sprint_id: s.sprint_id,
            milestone_id: s.milestone_id,
            title: s.title,
            description: s.description,
            estimate: s.estimate,
            priority: s.priority,
            is_done: s.is_done,
            created_at: s.created_at.timestamp(),
            updated_at: s.updated_at.timestamp(),
        }
    }
}
