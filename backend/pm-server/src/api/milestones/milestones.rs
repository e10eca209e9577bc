use crate::{ApiResult, AppState, MilestoneListResponse};

use pm_db::{DataService, QueryFilter};

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /Milestone?projectId=1
///
/// Ordered by deadline, then title
pub async fn list_milestones(
    State(state): State<AppState>,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<MilestoneListResponse>> {
    let Query(params) = query?;

    let service = DataService::new(state.pool.clone());
    let milestones = service
        .get_milestones(&QueryFilter::from_pairs(params))
        .await?;

    Ok(Json(MilestoneListResponse {
        milestones: milestones.into_iter().map(Into::into).collect(),
    }))
}
