//! Add/edit dialog of a sprint.
//!
//! ```text
//! Closed -> Open(Add)  -> Saving -> Closed | Open(Edit)
//! Closed -> Open(Edit) -> Saving -> Closed | Open(Edit)
//! ```

use crate::{
    Channel, ClientError, ClientResult, Command, Confirm, DANGER_TITLE, EditParameters, Notifier,
    Trigger, ViewContext,
};

use pm_core::{
    Boundary, DateRangeRules, EditTab, FormMode, Message, ProjectBounds, Selection, SprintDateRange,
    SprintDto, SprintForm, SprintFormModel,
};

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info};
use serde_json::Value;

pub const SPRINT_ADDED_MESSAGE: &str = "New sprint added to project successfully.";
pub const SPRINT_SAVED_MESSAGE: &str = "Sprint saved successfully.";
pub const SPRINT_DELETED_MESSAGE: &str = "Sprint deleted successfully.";
pub const SPRINT_DELETE_CONFIRM: &str =
    "Are you sure of sprint delete? Existing user stories in this sprint are moved to project backlog.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Open(FormMode),
    Saving(FormMode),
}

/// Which submit button was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Save,
    SaveAndClose,
}

pub struct SprintFormController {
    channel: Arc<dyn Channel>,
    notifier: Arc<dyn Notifier>,
    context: ViewContext,
    state: FormState,
    model: Option<SprintFormModel>,
    dates: Option<SprintDateRange>,
    trigger: Trigger,
    active_tab: EditTab,
}

impl SprintFormController {
    pub fn new(
        channel: Arc<dyn Channel>,
        notifier: Arc<dyn Notifier>,
        context: ViewContext,
    ) -> Self {
        Self {
            channel,
            notifier,
            context,
            state: FormState::Closed,
            model: None,
            dates: None,
            trigger: Trigger::none(),
            active_tab: EditTab::default(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn model(&self) -> Option<&SprintFormModel> {
        self.model.as_ref()
    }

    pub fn dates(&self) -> Option<&SprintDateRange> {
        self.dates.as_ref()
    }

    pub fn active_tab(&self) -> EditTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: EditTab) {
        self.active_tab = tab;
    }

    pub fn context(&self) -> &ViewContext {
        &self.context
    }

    /// Open the add dialog for the project in the view context.
    pub async fn open_add(
        &mut self,
        trigger: Trigger,
        form_data: BTreeMap<String, String>,
    ) -> ClientResult<&SprintFormModel> {
        let loaded = self.load_add(&form_data).await;
        let model = self.notify_err(loaded)?;

        let rules = DateRangeRules::new(bounds(&model), model.siblings.clone(), None);
        self.dates = Some(SprintDateRange::new(rules, None, None));
        self.open(FormMode::Add, trigger, EditTab::Details);

        info!("Opened sprint add form for project {}", model.project.id);
        Ok(&*self.model.insert(model))
    }

    /// Open the edit dialog; without `sprint_id` the sprint in the view
    /// context is edited.
    pub async fn open_edit(
        &mut self,
        sprint_id: Option<i64>,
        trigger: Trigger,
        parameters: EditParameters,
    ) -> ClientResult<&SprintFormModel> {
        let loaded = self.load_edit(sprint_id).await;
        let (model, sprint) = self.notify_err(loaded)?;

        let rules = DateRangeRules::new(bounds(&model), model.siblings.clone(), Some(sprint.id));
        self.dates = Some(SprintDateRange::new(
            rules,
            Some(sprint.date_start),
            Some(sprint.date_end),
        ));
        self.open(FormMode::Edit, trigger, parameters.active_tab);
        self.context.sprint = Some(sprint);

        info!(
            "Opened sprint edit form for sprint {} on tab {}",
            self.context.sprint_id().unwrap_or_default(),
            self.active_tab.as_str()
        );
        Ok(&*self.model.insert(model))
    }

    pub async fn sprint_backlog(
        &mut self,
        sprint_id: i64,
        trigger: Trigger,
    ) -> ClientResult<&SprintFormModel> {
        self.open_edit(Some(sprint_id), trigger, EditParameters::tab(EditTab::Backlog))
            .await
    }

    pub async fn sprint_charts(
        &mut self,
        sprint_id: i64,
        trigger: Trigger,
    ) -> ClientResult<&SprintFormModel> {
        self.open_edit(Some(sprint_id), trigger, EditParameters::tab(EditTab::Charts))
            .await
    }

    /// Pick a start or end date; a rejected date is toasted.
    pub fn select_date(&mut self, boundary: Boundary, date: NaiveDate) -> ClientResult<Selection> {
        let dates = self
            .dates
            .as_mut()
            .ok_or_else(|| ClientError::invalid_state("Sprint form is not open"))?;

        let selection = dates.select(boundary, date);
        if let Selection::Rejected { error, .. } = &selection {
            self.notifier
                .notify(&Message::error(error.message(&self.context.date_format)));
        }
        Ok(selection)
    }

    /// Pick a new start and end together, stopping at the first rejection.
    ///
    /// Each date is checked against the other field's current value, so a
    /// range moved past the current end has its end picked first.
    pub fn select_dates(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ClientResult<Vec<(Boundary, Selection)>> {
        let current_end = self.dates.as_ref().and_then(SprintDateRange::end);
        let order = match (start, end, current_end) {
            (Some(start), Some(_), Some(current_end)) if start > current_end => {
                [(Boundary::End, end), (Boundary::Start, Some(start))]
            }
            _ => [(Boundary::Start, start), (Boundary::End, end)],
        };

        let mut selections = Vec::new();
        for (boundary, date) in order {
            let Some(date) = date else {
                continue;
            };
            let selection = self.select_date(boundary, date)?;
            let rejected = !selection.is_accepted();
            selections.push((boundary, selection));
            if rejected {
                break;
            }
        }
        Ok(selections)
    }

    /// Validate and save. The returned command is what the caller runs next.
    pub async fn submit(
        &mut self,
        form: SprintForm,
        action: SaveAction,
    ) -> ClientResult<Option<Command>> {
        let FormState::Open(mode) = self.state else {
            return Err(ClientError::invalid_state("Sprint form is not open"));
        };

        let prepared = self.prepare(form);
        let form = self.notify_err(prepared)?;

        self.state = FormState::Saving(mode);
        let saved = self.save(mode, &form).await;
        let sprint = match saved {
            Ok(sprint) => sprint,
            Err(e) => {
                self.state = FormState::Open(mode);
                self.notifier.notify(&Message::error(e.user_message()));
                return Err(e);
            }
        };

        match mode {
            FormMode::Add => {
                info!("Sprint {} added to project {}", sprint.id, sprint.project_id);
                self.notifier.notify(&Message::success(SPRINT_ADDED_MESSAGE));
                let trigger = self.close_form();

                Ok(match action {
                    SaveAction::SaveAndClose => trigger.fire(),
                    SaveAction::Save => Some(Command::SprintEdit {
                        sprint_id: sprint.id,
                        trigger,
                        parameters: EditParameters::default(),
                    }),
                })
            }
            FormMode::Edit => {
                info!("Sprint {} saved", sprint.id);
                self.notifier.notify(&Message::success(SPRINT_SAVED_MESSAGE));

                match action {
                    SaveAction::SaveAndClose => Ok(self.close_form().fire()),
                    SaveAction::Save => {
                        self.state = FormState::Open(FormMode::Edit);
                        if let Some(model) = self.model.as_mut() {
                            model.sprint = Some(sprint.clone());
                        }
                        self.context.sprint = Some(sprint);
                        Ok(None)
                    }
                }
            }
        }
    }

    /// Close without saving.
    pub fn close(&mut self) -> Option<Command> {
        self.close_form().fire()
    }

    /// Delete the sprint being edited. The dialog closes first; cancelling the
    /// confirmation re-opens it on the same tab.
    pub async fn delete(&mut self, confirm: &dyn Confirm) -> ClientResult<Option<Command>> {
        if self.state != FormState::Open(FormMode::Edit) {
            return Err(ClientError::invalid_state("No sprint is being edited"));
        }
        let sprint_id = self
            .model
            .as_ref()
            .and_then(|m| m.sprint.as_ref())
            .map(|s| s.id)
            .ok_or_else(|| ClientError::invalid_state("No sprint is being edited"))?;

        let active_tab = self.active_tab;
        let trigger = Trigger::new(Command::SprintEdit {
            sprint_id,
            trigger: self.close_form(),
            parameters: EditParameters::tab(active_tab),
        });

        self.delete_sprint(sprint_id, trigger, confirm).await
    }

    /// Confirm and delete. Stories of the sprint move to the project backlog.
    ///
    /// A cancelled confirmation fires `trigger` as is. After a delete the
    /// trigger fires unless it would re-open the deleted sprint.
    pub async fn delete_sprint(
        &mut self,
        sprint_id: i64,
        trigger: Trigger,
        confirm: &dyn Confirm,
    ) -> ClientResult<Option<Command>> {
        if !confirm.confirm(DANGER_TITLE, SPRINT_DELETE_CONFIRM).await {
            debug!("Sprint {} delete cancelled", sprint_id);
            return Ok(trigger.fire());
        }

        let deleted = self.channel.delete(&format!("/Sprint/{}", sprint_id)).await;
        let body = self.notify_err(deleted)?;

        info!(
            "Sprint {} deleted, {} stories moved to backlog",
            sprint_id,
            body.get("moved_stories").and_then(Value::as_u64).unwrap_or(0)
        );
        self.notifier.notify(&Message::success(SPRINT_DELETED_MESSAGE));

        if self.context.sprint_id() == Some(sprint_id) {
            self.context.sprint = None;
        }

        Ok(trigger.fire_unless_edit_of(sprint_id))
    }

    async fn load_add(
        &self,
        form_data: &BTreeMap<String, String>,
    ) -> ClientResult<SprintFormModel> {
        let project_id = self
            .context
            .project_id()
            .ok_or_else(|| ClientError::invalid_state("No project selected"))?;

        let mut query = vec![("projectId", project_id.to_string())];
        query.extend(
            form_data
                .iter()
                .filter(|(key, _)| key.as_str() != "projectId")
                .map(|(key, value)| (key.as_str(), value.clone())),
        );

        let body = self.channel.get("/Sprint/add", &query).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn load_edit(
        &self,
        sprint_id: Option<i64>,
    ) -> ClientResult<(SprintFormModel, SprintDto)> {
        let sprint_id = sprint_id
            .or_else(|| self.context.sprint_id())
            .ok_or_else(|| ClientError::invalid_state("No sprint selected"))?;

        let body = self
            .channel
            .get("/Sprint/edit", &[("id", sprint_id.to_string())])
            .await?;
        let model: SprintFormModel = serde_json::from_value(body)?;
        let sprint = model
            .sprint
            .clone()
            .ok_or_else(|| ClientError::invalid_state("Edit form without a sprint"))?;

        Ok((model, sprint))
    }

    /// Copy the validated dates into the form and run the form checks.
    fn prepare(&self, mut form: SprintForm) -> ClientResult<SprintForm> {
        let (Some(model), Some(dates)) = (self.model.as_ref(), self.dates.as_ref()) else {
            return Err(ClientError::invalid_state("Sprint form is not open"));
        };

        for boundary in [Boundary::Start, Boundary::End] {
            if dates.field(boundary).invalid {
                return Err(ClientError::validation(
                    format!("{} date is not valid", boundary.label()),
                    Some(boundary.field()),
                ));
            }
        }

        form.project_id = model.project.id;
        form.date_start = dates.start();
        form.date_end = dates.end();
        form.validate()?;

        Ok(form)
    }

    async fn save(&self, mode: FormMode, form: &SprintForm) -> ClientResult<SprintDto> {
        let body = serde_json::to_value(form)?;

        let response = match mode {
            FormMode::Add => self.channel.post("/Sprint", body).await?,
            FormMode::Edit => {
                let id = self
                    .model
                    .as_ref()
                    .and_then(|m| m.sprint.as_ref())
                    .map(|s| s.id)
                    .ok_or_else(|| ClientError::invalid_state("No sprint is being edited"))?;
                self.channel.put(&format!("/Sprint/{}", id), body).await?
            }
        };

        let sprint = response.get("sprint").cloned().unwrap_or(Value::Null);
        Ok(serde_json::from_value(sprint)?)
    }

    fn open(&mut self, mode: FormMode, trigger: Trigger, tab: EditTab) {
        self.state = FormState::Open(mode);
        self.trigger = trigger;
        self.active_tab = tab;
    }

    /// Reset to `Closed` and hand back the caller's trigger.
    fn close_form(&mut self) -> Trigger {
        self.state = FormState::Closed;
        self.model = None;
        self.dates = None;
        self.active_tab = EditTab::default();
        std::mem::take(&mut self.trigger)
    }

    fn notify_err<T>(&self, result: ClientResult<T>) -> ClientResult<T> {
        if let Err(e) = &result {
            self.notifier.notify(&Message::error(e.user_message()));
        }
        result
    }
}

fn bounds(model: &SprintFormModel) -> ProjectBounds {
    ProjectBounds {
        start: model.project.date_start,
        end: model.project.date_end,
    }
}
