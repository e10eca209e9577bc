use crate::rows::{conflict_or, timestamp};
use crate::{DbError, QueryFilter, Result as DbErrorResult};

use pm_core::{NewUser, User};

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

const FILTER_COLUMNS: &[(&str, &str)] = &[
    ("id", "id"),
    ("username", "username"),
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("email", "email"),
];

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &NewUser) -> DbErrorResult<User> {
        let id = sqlx::query(
            r#"
                INSERT INTO users (username, first_name, last_name, email, date_format, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.date_format)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_or(e, "username already taken"))?
        .last_insert_rowid();

        self.find(&QueryFilter::new().eq("id", id))
            .await?
            .pop()
            .ok_or_else(|| DbError::not_found("User", id))
    }

    /// Ordered by last name.
    pub async fn find(&self, filter: &QueryFilter) -> DbErrorResult<Vec<User>> {
        let mut qb = QueryBuilder::<Sqlite>::new(
            "SELECT id, username, first_name, last_name, email, date_format, created_at FROM users",
        );
        filter.push_where(&mut qb, "User", FILTER_COLUMNS)?;
        qb.push(" ORDER BY last_name ASC, first_name ASC, id ASC");

        let rows = qb.build().fetch_all(&self.pool).await?;

        rows.iter().map(user_from_row).collect()
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        date_format: row.try_get("date_format")?,
        created_at: timestamp(row, "users", "created_at")?,
    })
}
