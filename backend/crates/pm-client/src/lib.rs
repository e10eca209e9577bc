//! pm-client library
//!
//! Headless controllers for the sprint screens and the HTTP channel they
//! talk through. The `pm` binary drives them from the terminal.

pub mod channel;
pub mod charts;
pub mod collaborators;
pub mod controllers;
pub mod error;
pub mod trigger;
pub mod view_context;

#[cfg(test)]
mod tests;

pub use channel::channel::Channel;
pub use channel::http_channel::{CSRF_HEADER, HttpChannel};
pub use charts::burndown_chart::{AxisLabel, BurndownChart, Y_AXIS_TITLE};
pub use charts::format::{format_duration, format_number, format_percent, format_thousands};
pub use charts::pie_chart::{PieChart, PieKind};
pub use charts::tooltip::{Tooltip, TooltipRow, TooltipSection};
pub use collaborators::chart_renderer::ChartRenderer;
pub use collaborators::confirm::{Confirm, DANGER_TITLE};
pub use collaborators::console::{AssumeYes, ConsoleNotifier, StdinConfirm, TextChartRenderer};
pub use collaborators::notifier::Notifier;
pub use controllers::backlog_reorder::BacklogReorderController;
pub use controllers::chart_dashboard::{ChartDashboardController, SprintCharts};
pub use controllers::exclude_day::{
    EXCLUDE_DAY_ADDED_MESSAGE, EXCLUDE_DAY_DELETE_CONFIRM, EXCLUDE_DAY_DELETED_MESSAGE,
    ExcludeDayController, ExcludeDayForm,
};
pub use controllers::sprint_form::{
    FormState, SPRINT_ADDED_MESSAGE, SPRINT_DELETE_CONFIRM, SPRINT_DELETED_MESSAGE,
    SPRINT_SAVED_MESSAGE, SaveAction, SprintFormController,
};
pub use error::{ClientError, Result as ClientResult};
pub use trigger::{Command, EditParameters, Trigger};
pub use view_context::ViewContext;
