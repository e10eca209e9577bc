//! Payload behind `GET /Sprint/add` and `GET /Sprint/edit`.

use crate::{ExcludeSprintDayDto, ProjectDto, SprintDto, SprintRange, StoryDto};

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Add,
    Edit,
}

/// Tab of the edit dialog that is active when it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditTab {
    #[default]
    Details,
    Backlog,
    Charts,
    ExcludeDays,
}

impl EditTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Backlog => "backlog",
            Self::Charts => "charts",
            Self::ExcludeDays => "exclude_days",
        }
    }
}

impl FromStr for EditTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "details" => Ok(Self::Details),
            "backlog" => Ok(Self::Backlog),
            "charts" => Ok(Self::Charts),
            "exclude_days" => Ok(Self::ExcludeDays),
            other => Err(format!("unknown tab '{}'", other)),
        }
    }
}

/// Everything the sprint dialog needs to render and validate its form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintFormModel {
    pub mode: FormMode,
    pub project: ProjectDto,
    /// Sprint being edited, `None` in add mode
    pub sprint: Option<SprintDto>,
    /// Other sprints of the project, used for the overlap check
    pub siblings: Vec<SprintRange>,
    /// Sprint backlog ordered by priority (edit mode only)
    #[serde(default)]
    pub stories: Vec<StoryDto>,
    /// Exclude days of the sprint (edit mode only)
    #[serde(default)]
    pub exclude_days: Vec<ExcludeSprintDayDto>,
    /// Prefilled values passed by the caller of the add dialog
    #[serde(default)]
    pub form_data: BTreeMap<String, String>,
}
