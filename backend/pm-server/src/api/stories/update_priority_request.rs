use serde::{Deserialize, Serialize};

/// Body of `PUT /Story/{id}`
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePriorityRequest {
    pub priority: i64,
}
