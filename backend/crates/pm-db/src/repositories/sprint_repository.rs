use crate::rows::timestamp;
use crate::{DbError, QueryFilter, Result as DbErrorResult};

use pm_core::{NewSprint, Sprint};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

const SELECT_SPRINTS: &str = "SELECT id, project_id, title, description, date_start, date_end, \
     ignore_weekends, created_at, updated_at FROM sprints";

const FILTER_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("projectId", "project_id"),
    ("title", "title"),
    ("dateStart", "date_start"),
    ("dateEnd", "date_end"),
    ("ignoreWeekends", "ignore_weekends"),
];

pub struct SprintRepository {
    pool: SqlitePool,
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, sprint: &NewSprint) -> DbErrorResult<Sprint> {
        let now = Utc::now().timestamp();

        let id = sqlx::query(
            r#"
                INSERT INTO sprints (
                    project_id, title, description, date_start, date_end,
                    ignore_weekends, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sprint.project_id)
        .bind(&sprint.title)
        .bind(&sprint.description)
        .bind(sprint.date_start)
        .bind(sprint.date_end)
        .bind(sprint.ignore_weekends)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Sprint", id))
    }

    /// The sprint keeps its project.
    pub async fn update(&self, id: i64, sprint: &NewSprint) -> DbErrorResult<Sprint> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE sprints
                SET title = ?, description = ?, date_start = ?, date_end = ?,
                    ignore_weekends = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&sprint.title)
        .bind(&sprint.description)
        .bind(sprint.date_start)
        .bind(sprint.date_end)
        .bind(sprint.ignore_weekends)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Sprint", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Sprint", id))
    }

    /// Delete the sprint and move its stories back to the project backlog.
    /// Returns how many stories were moved.
    pub async fn delete(&self, id: i64) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now().timestamp();

        let moved = sqlx::query("UPDATE stories SET sprint_id = NULL, updated_at = ? WHERE sprint_id = ?")
            .bind(now)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM sprints WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            // Dropping the transaction rolls back the story update
            return Err(DbError::not_found("Sprint", id));
        }

        tx.commit().await?;

        Ok(moved)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Sprint>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_SPRINTS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(sprint_from_row).transpose()
    }

    pub async fn find_by_project(&self, project_id: i64) -> DbErrorResult<Vec<Sprint>> {
        self.find(&QueryFilter::new().eq("projectId", project_id))
            .await
    }

    /// Ordered by start date.
    pub async fn find(&self, filter: &QueryFilter) -> DbErrorResult<Vec<Sprint>> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_SPRINTS);
        filter.push_where(&mut qb, "Sprint", FILTER_COLUMNS)?;
        qb.push(" ORDER BY date_start ASC, id ASC");

        let rows = qb.build().fetch_all(&self.pool).await?;

        rows.iter().map(sprint_from_row).collect()
    }
}

fn sprint_from_row(row: &SqliteRow) -> DbErrorResult<Sprint> {
    Ok(Sprint {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        date_start: row.try_get("date_start")?,
        date_end: row.try_get("date_end")?,
        ignore_weekends: row.try_get("ignore_weekends")?,
        created_at: timestamp(row, "sprints", "created_at")?,
        updated_at: timestamp(row, "sprints", "updated_at")?,
    })
}
