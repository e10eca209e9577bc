//! Sprint REST API handlers
//!
//! Dates are checked again here: the form controller validates while the
//! user picks, but a request can reach the server without it.

use crate::{
    ApiResult, AppState, CsrfGuard, SprintDeleteResponse, SprintListResponse, SprintResponse,
};

use pm_core::{DateRangeRules, NewSprint, SprintDto, SprintForm};
use pm_db::{DataService, DbError, QueryFilter, SprintRepository};

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
};

/// GET /Sprint?projectId=1
///
/// Sprints matching the equality filters, ordered by start date
pub async fn list_sprints(
    State(state): State<AppState>,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<SprintListResponse>> {
    let Query(params) = query?;

    let service = DataService::new(state.pool.clone());
    let sprints = service.get_sprints(&QueryFilter::from_pairs(params)).await?;

    Ok(Json(SprintListResponse {
        sprints: sprints.into_iter().map(SprintDto::from).collect(),
    }))
}

/// POST /Sprint
pub async fn create_sprint(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    payload: Result<Json<SprintForm>, JsonRejection>,
) -> ApiResult<Json<SprintResponse>> {
    let Json(form) = payload?;

    let new_sprint = form.validate()?;
    check_dates(&state, &new_sprint, None).await?;

    let repo = SprintRepository::new(state.pool.clone());
    let sprint = repo.create(&new_sprint).await?;

    log::info!(
        "Created sprint {} '{}' in project {}",
        sprint.id,
        sprint.title,
        sprint.project_id
    );

    Ok(Json(SprintResponse {
        sprint: sprint.into(),
    }))
}

/// PUT /Sprint/{id}
///
/// The sprint keeps its project whatever `project_id` the form carries.
pub async fn update_sprint(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    Path(id): Path<i64>,
    payload: Result<Json<SprintForm>, JsonRejection>,
) -> ApiResult<Json<SprintResponse>> {
    let Json(mut form) = payload?;

    let repo = SprintRepository::new(state.pool.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DbError::not_found("Sprint", id))?;
    form.project_id = existing.project_id;

    let new_sprint = form.validate()?;
    check_dates(&state, &new_sprint, Some(id)).await?;

    let sprint = repo.update(id, &new_sprint).await?;
    log::info!("Updated sprint {} '{}'", sprint.id, sprint.title);

    Ok(Json(SprintResponse {
        sprint: sprint.into(),
    }))
}

/// DELETE /Sprint/{id}
///
/// Stories of the sprint return to the project backlog.
pub async fn delete_sprint(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    Path(id): Path<i64>,
) -> ApiResult<Json<SprintDeleteResponse>> {
    let repo = SprintRepository::new(state.pool.clone());
    let moved_stories = repo.delete(id).await?;

    log::info!(
        "Deleted sprint {}, {} stories moved to backlog",
        id,
        moved_stories
    );

    Ok(Json(SprintDeleteResponse {
        deleted_id: id,
        moved_stories,
    }))
}

/// Project window and sibling sprints, same rules as the form's date pickers.
async fn check_dates(
    state: &AppState,
    sprint: &NewSprint,
    sprint_id: Option<i64>,
) -> ApiResult<()> {
    let service = DataService::new(state.pool.clone());
    let project = service.get_project(sprint.project_id).await?;

    let repo = SprintRepository::new(state.pool.clone());
    let siblings = repo
        .find_by_project(sprint.project_id)
        .await?
        .iter()
        .map(|s| s.range())
        .collect();

    DateRangeRules::new(project.bounds(), siblings, sprint_id)
        .check_range(sprint.date_start, sprint.date_end)?;

    Ok(())
}
