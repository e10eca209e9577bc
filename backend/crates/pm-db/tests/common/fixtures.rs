use pm_core::{NewProject, NewSprint, NewStory, NewUser, Project, Sprint, Story, User};
use pm_db::{ProjectRepository, SprintRepository, StoryRepository, UserRepository};

use chrono::NaiveDate;
use sqlx::SqlitePool;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Project running through Q1 2024
pub async fn create_test_project(pool: &SqlitePool) -> Project {
    ProjectRepository::new(pool.clone())
        .create(&NewProject {
            title: "Test Project".to_string(),
            description: Some("Test project description".to_string()),
            date_start: day(2024, 1, 1),
            date_end: day(2024, 3, 31),
        })
        .await
        .expect("Failed to create test project")
}

pub fn new_sprint(project_id: i64, title: &str, start: NaiveDate, end: NaiveDate) -> NewSprint {
    NewSprint {
        project_id,
        title: title.to_string(),
        description: None,
        date_start: start,
        date_end: end,
        ignore_weekends: false,
    }
}

pub async fn create_test_sprint(
    pool: &SqlitePool,
    project_id: i64,
    title: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Sprint {
    SprintRepository::new(pool.clone())
        .create(&new_sprint(project_id, title, start, end))
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
            estimate: Some(3.0),
            priority,
        })
        .await
        .expect("Failed to create test story")
}

pub async fn create_test_user(pool: &SqlitePool, username: &str, last_name: &str) -> User {
    UserRepository::new(pool.clone())
        .create(&NewUser {
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: last_name.to_string(),
            email: format!("{}@example.com", username),
            date_format: "%d.%m.%Y".to_string(),
        })
        .await
        .expect("Failed to create test user")
}
