use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityUpdate {
    pub story_id: i64,
    pub priority: i64,
}

/// Priorities for rows in display order, starting at 1.
pub fn priority_updates(story_ids: &[i64]) -> Vec<PriorityUpdate> {
    story_ids
        .iter()
        .enumerate()
        .map(|(index, story_id)| PriorityUpdate {
            story_id: *story_id,
            priority: index as i64 + 1,
        })
        .collect()
}
