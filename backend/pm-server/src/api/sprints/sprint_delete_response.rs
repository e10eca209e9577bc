use serde::{Deserialize, Serialize};

/// A deleted sprint and how many stories went back to the project backlog
#[derive(Debug, Serialize, Deserialize)]
pub struct SprintDeleteResponse {
    pub deleted_id: i64,
    pub moved_stories: u64,
}
