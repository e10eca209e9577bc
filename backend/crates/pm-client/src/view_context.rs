use pm_core::{DEFAULT_DATE_FORMAT, ProjectDto, SprintDto, format_date};

use chrono::NaiveDate;

/// What the user is looking at, handed to each controller explicitly.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub project: Option<ProjectDto>,
    pub sprint: Option<SprintDto>,
    /// strftime pattern of the current user
    pub date_format: String,
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl ViewContext {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            project: None,
            sprint: None,
            date_format: date_format.into(),
        }
    }

    pub fn with_project(mut self, project: ProjectDto) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_sprint(mut self, sprint: SprintDto) -> Self {
        self.sprint = Some(sprint);
        self
    }

    pub fn project_id(&self) -> Option<i64> {
        self.project.as_ref().map(|p| p.id)
    }

    pub fn sprint_id(&self) -> Option<i64> {
        self.sprint.as_ref().map(|s| s.id)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        format_date(date, &self.date_format)
    }
}
