//! Column decoding shared by the repositories.

use crate::{DbError, Result};

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Timestamps are stored as unix seconds.
pub(crate) fn timestamp(
    row: &SqliteRow,
    table: &'static str,
    column: &'static str,
) -> Result<DateTime<Utc>> {
    let secs: i64 = row.try_get(column)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::invalid_row(table, column))
}

/// Map a unique-constraint failure to `Conflict`, keep everything else.
#[track_caller]
pub(crate) fn conflict_or(e: sqlx::Error, message: &str) -> DbError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::conflict(message),
        _ => DbError::from(e),
    }
}
