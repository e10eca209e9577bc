use crate::rows::{conflict_or, timestamp};
use crate::{DbError, Result as DbErrorResult};

use pm_core::{ExcludeSprintDay, NewExcludeSprintDay};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ExcludeSprintDayRepository {
    pool: SqlitePool,
}

impl ExcludeSprintDayRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, day: &NewExcludeSprintDay) -> DbErrorResult<ExcludeSprintDay> {
        let id = sqlx::query(
            r#"
                INSERT INTO exclude_sprint_days (sprint_id, day, description, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(day.sprint_id)
        .bind(day.day)
        .bind(&day.description)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_or(e, "day is already excluded from this sprint"))?
        .last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("ExcludeSprintDay", id))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<ExcludeSprintDay>> {
        let row = sqlx::query(
            r#"
                SELECT id, sprint_id, day, description, created_at
                FROM exclude_sprint_days
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(exclude_day_from_row).transpose()
    }

    pub async fn find_by_sprint(&self, sprint_id: i64) -> DbErrorResult<Vec<ExcludeSprintDay>> {
        let rows = sqlx::query(
            r#"
                SELECT id, sprint_id, day, description, created_at
                FROM exclude_sprint_days
                WHERE sprint_id = ?
                ORDER BY day ASC
            "#,
        )
        .bind(sprint_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(exclude_day_from_row).collect()
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM exclude_sprint_days WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("ExcludeSprintDay", id));
        }

        Ok(())
    }
}

fn exclude_day_from_row(row: &SqliteRow) -> DbErrorResult<ExcludeSprintDay> {
    Ok(ExcludeSprintDay {
        id: row.try_get("id")?,
        sprint_id: row.try_get("sprint_id")?,
        day: row.try_get("day")?,
        description: row.try_get("description")?,
        created_at: timestamp(row, "exclude_sprint_days", "created_at")?,
    })
}
