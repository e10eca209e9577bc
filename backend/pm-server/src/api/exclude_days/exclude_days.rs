use crate::{
    ApiResult, AppState, CreateExcludeDayRequest, CsrfGuard, DeleteResponse, ExcludeDayResponse,
};

use pm_core::{ExcludeDayWindow, NewExcludeSprintDay};
use pm_db::{DbError, ExcludeSprintDayRepository, SprintRepository};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// POST /ExcludeSprintDay/create
///
/// The day must lie strictly between the sprint's first and last day.
pub async fn create_exclude_day(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    payload: Result<Json<CreateExcludeDayRequest>, JsonRejection>,
) -> ApiResult<Json<ExcludeDayResponse>> {
    let Json(req) = payload?;

    let sprint = SprintRepository::new(state.pool.clone())
        .find_by_id(req.sprint_id)
        .await?
        .ok_or_else(|| DbError::not_found("Sprint", req.sprint_id))?;

    ExcludeDayWindow::for_sprint(sprint.date_start, sprint.date_end).check_day(req.day)?;

    let description = req
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let repo = ExcludeSprintDayRepository::new(state.pool.clone());
    let day = repo
        .create(&NewExcludeSprintDay {
            sprint_id: sprint.id,
            day: req.day,
            description,
        })
        .await?;

    log::info!("Excluded {} from sprint {}", day.day, sprint.id);

    Ok(Json(ExcludeDayResponse {
        exclude_day: day.into(),
    }))
}

/// DELETE /ExcludeSprintDay/{id}
pub async fn delete_exclude_day(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let repo = ExcludeSprintDayRepository::new(state.pool.clone());
    repo.delete(id).await?;

    log::info!("Deleted exclude day {}", id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}
