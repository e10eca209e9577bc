//! Project entity - top-level container whose dates bound every sprint.

use crate::ProjectBounds;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A project groups milestones, sprints and stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// First day of the project (inclusive)
    pub date_start: NaiveDate,
    /// Last day of the project (inclusive)
    pub date_end: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Date window every sprint of this project must fit into.
    pub fn bounds(&self) -> ProjectBounds {
        ProjectBounds {
            start: self.date_start,
            end: self.date_end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}
