#![allow(dead_code)]

//! Test infrastructure for pm-server API tests

use pm_core::{NewProject, NewSprint, NewStory, Project, Sprint, Story};
use pm_db::{ProjectRepository, SprintRepository, StoryRepository};
use pm_server::{AppState, CSRF_HEADER, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_CSRF_TOKEN: &str = "test-csrf-token-0123456789";

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test pool with in-memory SQLite, migrations applied
pub async fn create_test_pool() -> SqlitePool {
    pm_db::create_memory_pool()
        .await
        .expect("Failed to create test database")
}

/// AppState without CSRF checks
pub async fn create_test_app_state() -> AppState {
    AppState::without_csrf(create_test_pool().await)
}

/// AppState requiring `TEST_CSRF_TOKEN` on mutating requests
pub async fn create_csrf_app_state() -> AppState {
    let security = pm_config::SecurityConfig {
        csrf_enabled: true,
        csrf_token: Some(TEST_CSRF_TOKEN.to_string()),
    };
    AppState::new(create_test_pool().await, &security)
}

/// Project running through Q1 2024
pub async fn create_test_project(pool: &SqlitePool) -> Project {
    ProjectRepository::new(pool.clone())
        .create(&NewProject {
            title: "Test Project".to_string(),
            description: None,
            date_start: day(2024, 1, 1),
            date_end: day(2024, 3, 31),
        })
        .await
        .expect("Failed to create test project")
}

pub async fn create_test_sprint(
    pool: &SqlitePool,
    project_id: i64,
    title: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Sprint {
    SprintRepository::new(pool.clone())
        .create(&NewSprint {
            project_id,
            title: title.to_string(),
            description: None,
            date_start: start,
            date_end: end,
            ignore_weekends: false,
        })
        .await
        .expect("Failed to create test sprint")
}

pub async fn create_test_story(
    pool: &SqlitePool,
    project_id: i64,
    sprint_id: Option<i64>,
    title: &str,
    priority: i64,
) -> Story {
    StoryRepository::new(pool.clone())
        .create(&NewStory {
            project_id,
            sprint_id,
            milestone_id: None,
            title: title.to_string(),
            description: None,
            estimate: None,
            priority,
        })
        .await
        .expect("Failed to create test story")
}

/// Send one request through a fresh router and decode the JSON body.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
    csrf: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let app: Router = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = csrf {
        builder = builder.header(CSRF_HEADER, token);
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // axum's own rejections (e.g. a non-numeric path id) are plain text
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
    });

    (status, json)
}

pub async fn get(state: &AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    send(state, "GET", uri, None, None).await
}
