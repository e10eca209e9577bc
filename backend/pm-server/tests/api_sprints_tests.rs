//! Integration tests for sprint API handlers
mod common;

use crate::common::{
    create_test_app_state, create_test_project, create_test_sprint, create_test_story, day, get,
    send,
};

use axum::http::StatusCode;
use serde_json::json;

fn sprint_form(project_id: i64, title: &str, start: &str, end: &str) -> serde_json::Value {
    json!({
        "project_id": project_id,
        "title": title,
        "description": "  ",
        "date_start": start,
        "date_end": end,
        "ignore_weekends": true,
    })
}

#[tokio::test]
async fn test_create_sprint_success() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;

    let body = sprint_form(project.id, "  Sprint 1 ", "2024-01-10", "2024-01-20");
    let (status, json) = send(&state, "POST", "/Sprint", Some(body), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sprint"]["title"], "Sprint 1");
    assert_eq!(json["sprint"]["date_start"], "2024-01-10");
    assert_eq!(json["sprint"]["ignore_weekends"], true);
    assert!(json["sprint"]["description"].is_null());
    assert!(json["sprint"]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_sprint_empty_title_fails() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;

    let body = sprint_form(project.id, "   ", "2024-01-10", "2024-01-20");
    let (status, json) = send(&state, "POST", "/Sprint", Some(body), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_create_sprint_outside_project_fails() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;

    let body = sprint_form(project.id, "Late", "2024-03-25", "2024-04-05");
    let (status, json) = send(&state, "POST", "/Sprint", Some(body), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "date_end");
}

#[tokio::test]
async fn test_create_sprint_overlapping_fails() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;
    create_test_sprint(&state.pool, project.id, "A", day(2024, 1, 10), day(2024, 1, 20)).await;

    // Shares its first day with A's last day
    let body = sprint_form(project.id, "B", "2024-01-20", "2024-01-30");
    let (status, json) = send(&state, "POST", "/Sprint", Some(body), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "date_start");
    assert!(json["error"]["message"].as_str().unwrap().contains("'A'"));
}

#[tokio::test]
async fn test_create_sprint_unknown_project_returns_404() {
    let state = create_test_app_state().await;

    let body = sprint_form(99, "Orphan", "2024-01-10", "2024-01-20");
    let (status, json) = send(&state, "POST", "/Sprint", Some(body), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_sprint_malformed_body_returns_400() {
    let state = create_test_app_state().await;

    let (status, json) = send(
        &state,
        "POST",
        "/Sprint",
        Some(json!({"title": "No dates", "date_start": "10.01.2024"})),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_update_sprint_may_keep_its_own_dates() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;
    let sprint =
        create_test_sprint(&state.pool, project.id, "A", day(2024, 1, 10), day(2024, 1, 20)).await;

    let body = sprint_form(project.id, "A renamed", "2024-01-12", "2024-01-22");
    let (status, json) = send(
        &state,
        "PUT",
        &format!("/Sprint/{}", sprint.id),
        Some(body),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sprint"]["id"], sprint.id);
    assert_eq!(json["sprint"]["title"], "A renamed");
    assert_eq!(json["sprint"]["date_end"], "2024-01-22");
}

#[tokio::test]
async fn test_update_sprint_cannot_change_project() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;
    let sprint =
        create_test_sprint(&state.pool, project.id, "A", day(2024, 1, 10), day(2024, 1, 20)).await;

    let body = sprint_form(12345, "A", "2024-01-10", "2024-01-20");
    let (status, json) = send(
        &state,
        "PUT",
        &format!("/Sprint/{}", sprint.id),
        Some(body),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sprint"]["project_id"], project.id);
}

#[tokio::test]
async fn test_update_missing_sprint_returns_404() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;

    let body = sprint_form(project.id, "Ghost", "2024-01-10", "2024-01-20");
    let (status, _) = send(&state, "PUT", "/Sprint/77", Some(body), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_sprint_moves_stories_to_backlog() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;
    let sprint =
        create_test_sprint(&state.pool, project.id, "A", day(2024, 1, 10), day(2024, 1, 20)).await;
    create_test_story(&state.pool, project.id, Some(sprint.id), "One", 1).await;
    create_test_story(&state.pool, project.id, Some(sprint.id), "Two", 2).await;

    let (status, json) = send(
        &state,
        "DELETE",
        &format!("/Sprint/{}", sprint.id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["deleted_id"], sprint.id);
    assert_eq!(json["moved_stories"], 2);

    let (_, backlog) = get(&state, "/Story?sprintId=null").await;
    let titles: Vec<&str> = backlog["stories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["One", "Two"]);

    let (status, _) = get(&state, &format!("/Sprint/edit?id={}", sprint.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_sprints_sorted_by_start_date() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;
    create_test_sprint(&state.pool, project.id, "Late", day(2024, 2, 1), day(2024, 2, 10)).await;
    create_test_sprint(&state.pool, project.id, "Early", day(2024, 1, 1), day(2024, 1, 10)).await;

    let (status, json) = get(&state, &format!("/Sprint?projectId={}", project.id)).await;

    assert_eq!(status, StatusCode::OK);
    let sprints = json["sprints"].as_array().unwrap();
    assert_eq!(sprints.len(), 2);
    assert_eq!(sprints[0]["title"], "Early");
    assert_eq!(sprints[1]["title"], "Late");
}

#[tokio::test]
async fn test_list_sprints_unknown_filter_returns_400() {
    let state = create_test_app_state().await;

    let (status, json) = get(&state, "/Sprint?color=red").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]["message"].as_str().unwrap().contains("color"));
}

#[tokio::test]
async fn test_add_form_returns_project_siblings_and_form_data() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;
    create_test_sprint(&state.pool, project.id, "A", day(2024, 1, 10), day(2024, 1, 20)).await;

    let (status, json) = get(
        &state,
        &format!("/Sprint/add?projectId={}&title=Draft", project.id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "add");
    assert_eq!(json["project"]["date_end"], "2024-03-31");
    assert!(json["sprint"].is_null());
    assert_eq!(json["siblings"].as_array().unwrap().len(), 1);
    assert_eq!(json["siblings"][0]["start"], "2024-01-10");
    assert_eq!(json["form_data"]["title"], "Draft");
    assert!(json["form_data"].get("projectId").is_none());
}

#[tokio::test]
async fn test_add_form_requires_project_id() {
    let state = create_test_app_state().await;

    let (status, _) = get(&state, "/Sprint/add").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&state, "/Sprint/add?projectId=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_form_excludes_itself_from_siblings() {
    let state = create_test_app_state().await;
    let project = create_test_project(&state.pool).await;
    let a =
        create_test_sprint(&state.pool, project.id, "A", day(2024, 1, 10), day(2024, 1, 20)).await;
    create_test_sprint(&state.pool, project.id, "B", day(2024, 2, 1), day(2024, 2, 10)).await;
    create_test_story(&state.pool, project.id, Some(a.id), "Second", 2).await;
    create_test_story(&state.pool, project.id, Some(a.id), "First", 1).await;

    let (status, json) = get(&state, &format!("/Sprint/edit?id={}", a.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "edit");
    assert_eq!(json["sprint"]["title"], "A");

    let siblings = json["siblings"].as_array().unwrap();
    assert_eq!(siblings.len(), 1);
    assert_eq!(siblings[0]["title"], "B");

    let stories = json["stories"].as_array().unwrap();
    assert_eq!(stories[0]["title"], "First");
    assert_eq!(stories[1]["title"], "Second");
}
