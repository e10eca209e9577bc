//! Form models behind the sprint add/edit dialog.

use crate::{ApiError, ApiResult, AppState, EditFormQuery};

use pm_core::{FormMode, SprintFormModel, SprintRange};
use pm_db::{DataService, DbError, ExcludeSprintDayRepository, SprintRepository, StoryRepository};

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /Sprint/add?projectId=1
///
/// Every other query parameter is returned as prefilled form data.
pub async fn add_form(
    State(state): State<AppState>,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<SprintFormModel>> {
    let Query(mut form_data) = query?;

    let raw_project_id = form_data
        .remove("projectId")
        .ok_or_else(|| ApiError::bad_request("projectId is required"))?;
    let project_id: i64 = raw_project_id
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid projectId: '{}'", raw_project_id)))?;

    let service = DataService::new(state.pool.clone());
    let project = service.get_project(project_id).await?;
    let siblings = sibling_ranges(&state, project_id, None).await?;

    Ok(Json(SprintFormModel {
        mode: FormMode::Add,
        project: project.into(),
        sprint: None,
        siblings,
        stories: Vec::new(),
        exclude_days: Vec::new(),
        form_data,
    }))
}

/// GET /Sprint/edit?id=1
pub async fn edit_form(
    State(state): State<AppState>,
    query: Result<Query<EditFormQuery>, QueryRejection>,
) -> ApiResult<Json<SprintFormModel>> {
    let Query(EditFormQuery { id }) = query?;

    let sprint = SprintRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| DbError::not_found("Sprint", id))?;

    let service = DataService::new(state.pool.clone());
    let project = service.get_project(sprint.project_id).await?;
    let siblings = sibling_ranges(&state, sprint.project_id, Some(id)).await?;

    let stories = StoryRepository::new(state.pool.clone())
        .find_by_sprint(id)
        .await?;
    let exclude_days = ExcludeSprintDayRepository::new(state.pool.clone())
        .find_by_sprint(id)
        .await?;

    Ok(Json(SprintFormModel {
        mode: FormMode::Edit,
        project: project.into(),
        sprint: Some(sprint.into()),
        siblings,
        stories: stories.into_iter().map(Into::into).collect(),
        exclude_days: exclude_days.into_iter().map(Into::into).collect(),
        form_data: BTreeMap::new(),
    }))
}

async fn sibling_ranges(
    state: &AppState,
    project_id: i64,
    exclude: Option<i64>,
) -> ApiResult<Vec<SprintRange>> {
    let sprints = SprintRepository::new(state.pool.clone())
        .find_by_project(project_id)
        .await?;

    Ok(sprints
        .iter()
        .filter(|s| Some(s.id) != exclude)
        .map(|s| s.range())
        .collect())
}
