pub mod burndown;
pub mod date_format;
pub mod date_range;
pub mod error;
pub mod exclude_day;
pub mod message;
pub mod models;
pub mod reorder;
pub mod sprint_form;

#[cfg(test)]
mod tests;

pub use burndown::aggregate::{BurndownInput, build_chart_data};
pub use burndown::chart_data::{
    ChartDataTasks, ChartPoint, ChartSeries, ChartSprint, PieSlice, SERIES_ACTUAL, SERIES_IDEAL,
    SprintStatistics,
};
pub use date_format::{DEFAULT_DATE_FORMAT, ISO_DATE_FORMAT, format_date, parse_date};
pub use date_range::boundary::Boundary;
pub use date_range::date_range_error::DateRangeError;
pub use date_range::rules::{DateRangeRules, ProjectBounds, SprintRange, check_boundary};
pub use date_range::sprint_date_range::{DateField, Selection, SprintDateRange};
pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use exclude_day::{ExcludeDayError, ExcludeDayWindow};
pub use message::{Message, MessageKind};
pub use models::exclude_sprint_day::{ExcludeSprintDay, NewExcludeSprintDay};
pub use models::exclude_sprint_day_dto::ExcludeSprintDayDto;
pub use models::milestone::{Milestone, NewMilestone};
pub use models::milestone_dto::MilestoneDto;
pub use models::project::{NewProject, Project};
pub use models::project_dto::ProjectDto;
pub use models::sprint::{NewSprint, Sprint};
pub use models::sprint_dto::SprintDto;
pub use models::sprint_form_model::{EditTab, FormMode, SprintFormModel};
pub use models::story::{NewStory, Story};
pub use models::story_dto::StoryDto;
pub use models::task::{NewTask, Task, TaskPhaseDuration};
pub use models::user::{NewUser, User};
pub use models::user_dto::UserDto;
pub use reorder::priority_update::{PriorityUpdate, priority_updates};
pub use reorder::reorder_report::{
    REORDER_ERROR_MESSAGE, REORDER_SUCCESS_MESSAGE, ReorderReport, RowOutcome,
};
pub use reorder::settled_batch::SettledBatch;
pub use sprint_form::{MAX_TITLE_LENGTH, SprintForm};
