use pm_core::MilestoneDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MilestoneListResponse {
    pub milestones: Vec<MilestoneDto>,
}
