//! Tasks only feed the sprint statistics; they have no API of their own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub story_id: i64,
    pub title: String,
    pub task_type: String,
    /// Day the task was finished, `None` while open
    pub done_on: Option<NaiveDate>,
}

/// Time a task spent in one workflow phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPhaseDuration {
    pub id: i64,
    pub task_id: i64,
    pub phase: String,
    pub duration_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub story_id: i64,
    pub title: String,
    pub task_type: String,
    pub done_on: Option<NaiveDate>,
}
