use crate::ApiError;

use pm_core::{Boundary, DateRangeError, ExcludeDayError};
use pm_db::DbError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let response = ApiError::not_found("Sprint 3 not found").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Sprint 3 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let response =
        ApiError::validation("Sprint title cannot be empty", Some("title")).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let response = ApiError::forbidden("Missing CSRF token").into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let response = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_db_not_found_maps_to_not_found() {
    let error = ApiError::from(DbError::not_found("Project", 42));

    match error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Project 42 not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_db_invalid_filter_maps_to_bad_request() {
    let error = ApiError::from(DbError::InvalidFilter {
        entity: "Sprint",
        key: "color".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(error, ApiError::BadRequest { ref message, .. } if message.contains("color")));
}

#[test]
fn test_db_conflict_maps_to_409() {
    let error = ApiError::from(DbError::conflict("Day already excluded"));

    assert_eq!(error.status(), StatusCode::CONFLICT);
    assert_eq!(error.code(), "CONFLICT");
}

#[test]
fn test_db_migration_error_is_internal() {
    let error = ApiError::from(DbError::Migration {
        message: "checksum mismatch".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // Details stay in the log
    assert!(matches!(error, ApiError::Internal { ref message, .. } if !message.contains("checksum")));
}

#[test]
fn test_unreadable_row_hides_table_details() {
    let error = ApiError::from(DbError::invalid_row("sprints", "created_at"));

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(matches!(error, ApiError::Internal { ref message, .. } if !message.contains("sprints")));
}

#[test]
fn test_date_range_error_names_the_rejected_field() {
    let error = ApiError::from(DateRangeError::OutsideProject {
        boundary: Boundary::End,
        min: day(2024, 1, 1),
        max: day(2024, 3, 31),
    });

    match error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(field.as_deref(), Some("date_end"));
            assert!(message.contains("2024-03-31"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_exclude_day_error_is_validation_on_day() {
    let error = ApiError::from(ExcludeDayError::OutsideSprint {
        min: day(2024, 1, 11),
        max: day(2024, 1, 19),
    });

    match error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(field.as_deref(), Some("day"));
            assert_eq!(message, "Exclude date must be between 2024-01-11 and 2024-01-19.");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}
