//! Tasks and their phase durations, read for the sprint statistics.

use crate::{DbError, Result as DbErrorResult};

use pm_core::{NewTask, Task, TaskPhaseDuration};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, task: &NewTask) -> DbErrorResult<Task> {
        let id = sqlx::query(
            "INSERT INTO tasks (story_id, title, task_type, done_on) VALUES (?, ?, ?, ?)",
        )
        .bind(task.story_id)
        .bind(&task.title)
        .bind(&task.task_type)
        .bind(task.done_on)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(Task {
            id,
            story_id: task.story_id,
            title: task.title.clone(),
            task_type: task.task_type.clone(),
            done_on: task.done_on,
        })
    }

    pub async fn add_phase_duration(
        &self,
        task_id: i64,
        phase: &str,
        duration_seconds: i64,
    ) -> DbErrorResult<TaskPhaseDuration> {
        let result = sqlx::query(
            "INSERT INTO task_phase_durations (task_id, phase, duration_seconds) VALUES (?, ?, ?)",
        )
        .bind(task_id)
        .bind(phase)
        .bind(duration_seconds)
        .execute(&self.pool)
        .await;

        let id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                return Err(DbError::not_found("Task", task_id));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(TaskPhaseDuration {
            id,
            task_id,
            phase: phase.to_string(),
            duration_seconds,
        })
    }

    /// Tasks of every story currently planned in the sprint.
    pub async fn find_by_sprint(&self, sprint_id: i64) -> DbErrorResult<Vec<Task>> {
        let rows = sqlx::query(
            r#"
                SELECT t.id, t.story_id, t.title, t.task_type, t.done_on
                FROM tasks t
                JOIN stories s ON s.id = t.story_id
                WHERE s.sprint_id = ?
                ORDER BY t.id ASC
            "#,
        )
        .bind(sprint_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(task_from_row).collect()
    }

    pub async fn find_phase_durations_by_sprint(
        &self,
        sprint_id: i64,
    ) -> DbErrorResult<Vec<TaskPhaseDuration>> {
        let rows = sqlx::query(
            r#"
                SELECT d.id, d.task_id, d.phase, d.duration_seconds
                FROM task_phase_durations d
                JOIN tasks t ON t.id = d.task_id
                JOIN stories s ON s.id = t.story_id
                WHERE s.sprint_id = ?
                ORDER BY d.id ASC
            "#,
        )
        .bind(sprint_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<TaskPhaseDuration> {
                Ok(TaskPhaseDuration {
                    id: row.try_get("id")?,
                    task_id: row.try_get("task_id")?,
                    phase: row.try_get("phase")?,
                    duration_seconds: row.try_get("duration_seconds")?,
                })
            })
            .collect()
    }
}

fn task_from_row(row: &SqliteRow) -> DbErrorResult<Task> {
    Ok(Task {
        id: row.try_get("id")?,
        story_id: row.try_get("story_id")?,
        title: row.try_get("title")?,
        task_type: row.try_get("task_type")?,
        done_on: row.try_get("done_on")?,
    })
}
