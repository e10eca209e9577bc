use crate::{
    AppState, add_form, chart_data_tasks, create_exclude_day, create_sprint, csrf_token,
    delete_exclude_day, delete_sprint, edit_form, get_project, health, list_milestones,
    list_sprints, list_stories, list_users, update_priorities, update_priority, update_sprint,
};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};

/// Requests served at once when the caller does not say otherwise
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 256;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    build_router_with_limit(state, DEFAULT_CONCURRENCY_LIMIT)
}

pub fn build_router_with_limit(state: AppState, max_concurrent: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/csrfToken", get(csrf_token))
        // Sprint dialog
        .route("/Sprint", get(list_sprints).post(create_sprint))
        .route("/Sprint/add", get(add_form))
        .route("/Sprint/edit", get(edit_form))
        .route("/Sprint/ChartDataTasks", get(chart_data_tasks))
        .route("/Sprint/{id}", put(update_sprint).delete(delete_sprint))
        // Backlog
        .route("/Story", get(list_stories))
        .route("/Story/priorities", put(update_priorities))
        .route("/Story/{id}", put(update_priority))
        // Exclude days
        .route("/ExcludeSprintDay/create", post(create_exclude_day))
        .route("/ExcludeSprintDay/{id}", delete(delete_exclude_day))
        // Read-only lookups
        .route("/Project/{id}", get(get_project))
        .route("/Milestone", get(list_milestones))
        .route("/User", get(list_users))
        .with_state(state)
        .layer(ConcurrencyLimitLayer::new(max_concurrent))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
