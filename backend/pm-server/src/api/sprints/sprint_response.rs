use pm_core::SprintDto;

use serde::{Deserialize, Serialize};

/// Response wrapper for a single sprint
#[derive(Debug, Serialize, Deserialize)]
pub struct SprintResponse {
    pub sprint: SprintDto,
}
