use pm_core::StoryDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct StoryListResponse {
    pub stories: Vec<StoryDto>,
}
