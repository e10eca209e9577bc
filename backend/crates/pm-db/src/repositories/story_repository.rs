use crate::rows::timestamp;
use crate::{DbError, QueryFilter, Result as DbErrorResult};

use pm_core::{NewStory, PriorityUpdate, Story};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

const SELECT_STORIES: &str = "SELECT id, project_id, sprint_id, milestone_id, title, description, \
     estimate, priority, is_done, created_at, updated_at FROM stories";

const FILTER_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("projectId", "project_id"),
    ("sprintId", "sprint_id"),
    ("milestoneId", "milestone_id"),
    ("title", "title"),
    ("priority", "priority"),
    ("isDone", "is_done"),
];

pub struct StoryRepository {
    pool: SqlitePool,
}

impl StoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, story: &NewStory) -> DbErrorResult<Story> {
        let now = Utc::now().timestamp();

        let id = sqlx::query(
            r#"
                INSERT INTO stories (
                    project_id, sprint_id, milestone_id, title, description,
                    estimate, priority, is_done, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            "#,
        )
        .bind(story.project_id)
        .bind(story.sprint_id)
        .bind(story.milestone_id)
        .bind(&story.title)
        .bind(&story.description)
        .bind(story.estimate)
        .bind(story.priority)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Story", id))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Story>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_STORIES))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(story_from_row).transpose()
    }

    /// Sprint backlog in work order.
    pub async fn find_by_sprint(&self, sprint_id: i64) -> DbErrorResult<Vec<Story>> {
        self.find(&QueryFilter::new().eq("sprintId", sprint_id))
            .await
    }

    /// Ordered by priority, then title.
    pub async fn find(&self, filter: &QueryFilter) -> DbErrorResult<Vec<Story>> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_STORIES);
        filter.push_where(&mut qb, "Story", FILTER_COLUMNS)?;
        qb.push(" ORDER BY priority ASC, title ASC");

        let rows = qb.build().fetch_all(&self.pool).await?;

        rows.iter().map(story_from_row).collect()
    }

    pub async fn update_priority(&self, id: i64, priority: i64) -> DbErrorResult<Story> {
        let result = sqlx::query("UPDATE stories SET priority = ?, updated_at = ? WHERE id = ?")
            .bind(priority)
            .bind(Utc::now().timestamp())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Story", id));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Story", id))
    }

    /// All updates or none. With `sprint_id` set, every story must belong to it.
    pub async fn update_priorities(
        &self,
        sprint_id: Option<i64>,
        updates: &[PriorityUpdate],
    ) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now().timestamp();

        for update in updates {
            let mut qb = QueryBuilder::<Sqlite>::new("UPDATE stories SET priority = ");
            qb.push_bind(update.priority);
            qb.push(", updated_at = ").push_bind(now);
            qb.push(" WHERE id = ").push_bind(update.story_id);
            if let Some(sprint_id) = sprint_id {
                qb.push(" AND sprint_id = ").push_bind(sprint_id);
            }

            let affected = qb.build().execute(&mut *tx).await?.rows_affected();
            if affected == 0 {
                return Err(DbError::not_found("Story", update.story_id));
            }
        }

        tx.commit().await?;
        log::debug!("Updated priorities of {} stories", updates.len());

        Ok(())
    }
}

fn story_from_row(row: &SqliteRow) -> DbErrorResult<Story> {
    Ok(Story {
        id: row.try_get("id")?,
        project_id: row.try_get("project_id")?,
        sprint_id: row.try_get("sprint_id")?,
        milestone_id: row.try_get("milestone_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        estimate: row.try_get("estimate")?,
        priority: row.try_get("priority")?,
        is_done: row.try_get("is_done")?,
        created_at: timestamp(row, "stories", "created_at")?,
        updated_at: timestamp(row, "stories", "updated_at")?,
    })
}
