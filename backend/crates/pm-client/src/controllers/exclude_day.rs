//! Exclude days tab of the sprint dialog.

use crate::{Channel, ClientError, ClientResult, Command, Confirm, DANGER_TITLE, Notifier};

use pm_core::{EditTab, ExcludeDayWindow, ExcludeSprintDayDto, Message, SprintDto, format_date};

use std::sync::Arc;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const EXCLUDE_DAY_ADDED_MESSAGE: &str = "New sprint exclude day added successfully.";
pub const EXCLUDE_DAY_DELETED_MESSAGE: &str = "Sprint exclude day deleted successfully.";
pub const EXCLUDE_DAY_DELETE_CONFIRM: &str =
    "Are you sure that you want to remove sprint exclude day?";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeDayForm {
    pub day: Option<NaiveDate>,
    pub description: Option<String>,
}

pub struct ExcludeDayController {
    channel: Arc<dyn Channel>,
    notifier: Arc<dyn Notifier>,
    sprint_id: i64,
    window: ExcludeDayWindow,
    date_format: String,
    can_add: bool,
}

impl ExcludeDayController {
    pub fn new(
        channel: Arc<dyn Channel>,
        notifier: Arc<dyn Notifier>,
        sprint: &SprintDto,
        date_format: impl Into<String>,
    ) -> Self {
        Self {
            channel,
            notifier,
            sprint_id: sprint.id,
            window: ExcludeDayWindow::for_sprint(sprint.date_start, sprint.date_end),
            date_format: date_format.into(),
            can_add: false,
        }
    }

    pub fn window(&self) -> ExcludeDayWindow {
        self.window
    }

    /// Whether the add action is enabled.
    pub fn can_add(&self) -> bool {
        self.can_add
    }

    /// Days strictly inside the sprint are accepted; others are toasted and
    /// disable the add action.
    pub fn select_day(&mut self, day: NaiveDate) -> bool {
        self.can_add = match self.window.check_day(day) {
            Ok(()) => true,
            Err(e) => {
                self.notifier
                    .notify(&Message::error(e.message(&self.date_format)));
                false
            }
        };
        self.can_add
    }

    /// Create the exclude day; the returned command reloads the tab.
    pub async fn add(
        &mut self,
        form: ExcludeDayForm,
    ) -> ClientResult<(ExcludeSprintDayDto, Command)> {
        let result = self.create(form).await;
        let day = self.notify_err(result)?;

        info!(
            "Exclude day {} added to sprint {}",
            format_date(day.day, &self.date_format),
            self.sprint_id
        );
        self.notifier
            .notify(&Message::success(EXCLUDE_DAY_ADDED_MESSAGE));
        self.can_add = false;

        Ok((day, self.reload()))
    }

    /// Confirm and delete. `None` when the user cancelled.
    pub async fn remove(
        &self,
        day_id: i64,
        confirm: &dyn Confirm,
    ) -> ClientResult<Option<Command>> {
        if !confirm.confirm(DANGER_TITLE, EXCLUDE_DAY_DELETE_CONFIRM).await {
            return Ok(None);
        }

        let result = self
            .channel
            .delete(&format!("/ExcludeSprintDay/{}", day_id))
            .await;
        self.notify_err(result)?;

        info!("Exclude day {} removed from sprint {}", day_id, self.sprint_id);
        self.notifier
            .notify(&Message::success(EXCLUDE_DAY_DELETED_MESSAGE));

        Ok(Some(self.reload()))
    }

    async fn create(&self, form: ExcludeDayForm) -> ClientResult<ExcludeSprintDayDto> {
        let day = form
            .day
            .ok_or_else(|| ClientError::validation("Exclude date is required", Some("day")))?;
        if let Err(e) = self.window.check_day(day) {
            return Err(ClientError::validation(e.message(&self.date_format), Some("day")));
        }

        let body = json!({
            "sprint_id": self.sprint_id,
            "day": day,
            "description": form.description,
        });
        let response = self.channel.post("/ExcludeSprintDay/create", body).await?;
        let created = response.get("exclude_day").cloned().unwrap_or(Value::Null);

        Ok(serde_json::from_value(created)?)
    }

    fn reload(&self) -> Command {
        Command::ReloadTab {
            sprint_id: self.sprint_id,
            tab: EditTab::ExcludeDays,
        }
    }

    fn notify_err<T>(&self, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(e) = &result {
            self.notifier.notify(&Message::error(e.user_message()));
        }
        result
    }
}
