//! Story REST API handlers
//!
//! Priority updates arrive either one row per request or as a single
//! all-or-nothing batch.

use crate::{
    ApiError, ApiResult, AppState, CsrfGuard, PrioritiesResponse, StoryListResponse,
    StoryResponse, UpdatePrioritiesRequest, UpdatePriorityRequest,
};

use pm_core::priority_updates;
use pm_db::{DataService, QueryFilter, StoryRepository};

use std::collections::{BTreeMap, BTreeSet};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
};

/// GET /Story?sprintId=1, GET /Story?sprintId=null for the backlog
///
/// Ordered by priority, then title
pub async fn list_stories(
    State(state): State<AppState>,
    query: Result<Query<BTreeMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<StoryListResponse>> {
    let Query(params) = query?;

    let service = DataService::new(state.pool.clone());
    let stories = service.get_stories(&QueryFilter::from_pairs(params)).await?;

    Ok(Json(StoryListResponse {
        stories: stories.into_iter().map(Into::into).collect(),
    }))
}

/// PUT /Story/{id}
pub async fn update_priority(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    Path(id): Path<i64>,
    payload: Result<Json<UpdatePriorityRequest>, JsonRejection>,
) -> ApiResult<Json<StoryResponse>> {
    let Json(req) = payload?;

    if req.priority < 1 {
        return Err(ApiError::validation(
            format!("Priority must be at least 1, got {}", req.priority),
            Some("priority"),
        ));
    }

    let repo = StoryRepository::new(state.pool.clone());
    let story = repo.update_priority(id, req.priority).await?;

    log::debug!("Story {} priority set to {}", id, req.priority);

    Ok(Json(StoryResponse {
        story: story.into(),
    }))
}

/// PUT /Story/priorities
///
/// Position `i` of `story_ids` gets priority `i + 1`. Nothing changes when
/// any story is missing.
pub async fn update_priorities(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    payload: Result<Json<UpdatePrioritiesRequest>, JsonRejection>,
) -> ApiResult<Json<PrioritiesResponse>> {
    let Json(req) = payload?;

    let unique: BTreeSet<i64> = req.story_ids.iter().copied().collect();
    if unique.len() != req.story_ids.len() {
        return Err(ApiError::validation(
            "story_ids contains duplicates",
            Some("story_ids"),
        ));
    }

    let updates = priority_updates(&req.story_ids);
    let repo = StoryRepository::new(state.pool.clone());
    repo.update_priorities(req.sprint_id, &updates).await?;

    log::info!("Reordered {} stories", updates.len());

    Ok(Json(PrioritiesResponse {
        updated: updates.len(),
    }))
}
