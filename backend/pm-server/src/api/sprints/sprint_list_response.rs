use pm_core::SprintDto;

use serde::{Deserialize, Serialize};

/// Response wrapper for a list of sprints
#[derive(Debug, Serialize, Deserialize)]
pub struct SprintListResponse {
    pub sprints: Vec<SprintDto>,
}
