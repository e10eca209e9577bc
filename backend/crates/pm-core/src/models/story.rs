use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user story. Stories without a sprint live in the project backlog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub project_id: i64,
    /// `None` means the story is in the project backlog
    pub sprint_id: Option<i64>,
    pub milestone_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub estimate: Option<f64>,
    /// Work order inside the sprint, lower first
    pub priority: i64,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    pub fn in_backlog(&self) -> bool {
        self.sprint_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStory {
    pub project_id: i64,
    pub sprint_id: Option<i64>,
    pub milestone_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub estimate: Option<f64>,
    pub priority: i64,
}
