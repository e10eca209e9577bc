use pm_core::StoryDto;

use serde::{Deserialize, Serialize};

/// Response wrapper for a single story
#[derive(Debug, Serialize, Deserialize)]
pub struct StoryResponse {
    pub story: StoryDto,
}
