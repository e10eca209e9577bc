use crate::{ApiResult, AppState, ProjectResponse};

use pm_db::DataService;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /Project/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProjectResponse>> {
    let service = DataService::new(state.pool.clone());
    let project = service.get_project(id).await?;

    Ok(Json(ProjectResponse {
        project: project.into(),
    }))
}
