use pm_core::ExcludeSprintDayDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ExcludeDayResponse {
    pub exclude_day: ExcludeSprintDayDto,
}
