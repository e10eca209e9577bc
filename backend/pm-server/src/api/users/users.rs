use crate::{ApiResult, AppState, UserListResponse};

use pm_db::{DataService, QueryFilter};

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /User?username=jdoe
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<UserListResponse>> {
    let Query(params) = query?;

    let service = DataService::new(state.pool.clone());
    let users = service.get_users(&QueryFilter::from_pairs(params)).await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}
