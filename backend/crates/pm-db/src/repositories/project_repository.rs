use crate::rows::timestamp;
use crate::{DbError, Result as DbErrorResult};

use pm_core::{NewProject, Project};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &NewProject) -> DbErrorResult<Project> {
        let now = Utc::now().timestamp();

        let id = sqlx::query(
            r#"
                INSERT INTO projects (title, description, date_start, date_end, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.date_start)
        .bind(project.date_end)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Project", id))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(
            r#"
                SELECT id, title, description, date_start, date_end, created_at, updated_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, title, description, date_start, date_end, created_at, updated_at
                FROM projects
                ORDER BY date_start ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(project_from_row).collect()
    }
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        date_start: row.try_get("date_start")?,
        date_end: row.try_get("date_end")?,
        created_at: timestamp(row, "projects", "created_at")?,
        updated_at: timestamp(row, "projects", "updated_at")?,
    })
}
