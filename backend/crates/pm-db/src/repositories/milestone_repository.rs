use crate::rows::timestamp;
use crate::{DbError, QueryFilter, Result as DbErrorResult};

use pm_core::{Milestone, NewMilestone};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

const FILTER_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("projectId", "project_id"),
    ("title", "title"),
    ("deadline", "deadline"),
];

pub struct MilestoneRepository {
    pool: SqlitePool,
}

impl MilestoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, milestone: &NewMilestone) -> DbErrorResult<Milestone> {
        let now = Utc::now().timestamp();

        let id = sqlx::query(
            r#"
                INSERT INTO milestones (project_id, title, description, deadline, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(milestone.project_id)
        .bind(&milestone.title)
        .bind(&milestone.description)
        .bind(milestone.deadline)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        self.find(&QueryFilter::new().eq("id", id))
            .await?
            .pop()
            .ok_or_else(|| DbError::not_found("Milestone", id))
    }

    /// Ordered by deadline, then title.
    pub async fn find(&self, filter: &QueryFilter) -> DbErrorResult<Vec<Milestone>> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT id, project_id, title, description, deadline, created_at, updated_at FROM milestones",
        );
        filter.push_where(&mut qb, "Milestone", FILTER_COLUMNS)?;
        qb.push(" ORDER BY deadline ASC, title ASC");

        let rows = qb.build().fetch_all(&self.pool).await?;

        rows.iter().map(milestone_from_row).collect()
    }
}

fn milestone_from_row(row: &SqliteRow) -> DbErrorResult<Milestone> {
    Ok(Milestone {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        deadline: row.try_get("deadline")?,
        created_at: timestamp(row, "milestones", "created_at")?,
        updated_at: timestamp(row, "milestones", "updated_at")?,
    })
}
