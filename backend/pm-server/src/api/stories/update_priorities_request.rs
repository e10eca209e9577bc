use serde::{Deserialize, Serialize};

/// Body of `PUT /Story/priorities`: story ids in their new display order.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePrioritiesRequest {
    /// When set, every story must belong to this sprint
    #[serde(default)]
    pub sprint_id: Option<i64>,
    pub story_ids: Vec<i64>,
}
