use pm_core::ProjectDto;

use serde::{Deserialize, Serialize};

/// Response wrapper for a single project
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub project: ProjectDto,
}
