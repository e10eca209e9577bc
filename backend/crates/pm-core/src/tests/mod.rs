mod date_range;

use crate::{ProjectBounds, Sprint, SprintRange};

use chrono::{NaiveDate, Utc};

pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn sprint(id: i64, start: NaiveDate, end: NaiveDate, ignore_weekends: bool) -> Sprint {
    let now = Utc::now();
    Sprint {
        id,
        project_id: 1,
        title: format!("Sprint {}", id),
        description: None,
        date_start: start,
        date_end: end,
        ignore_weekends,
        created_at: now,
        updated_at: now,
    }
}

/// Project running through Q1 2024.
pub(crate) fn q1_2024() -> ProjectBounds {
    ProjectBounds {
        start: day(2024, 1, 1),
        end: day(2024, 3, 31),
    }
}

pub(crate) fn sprint_a() -> SprintRange {
    SprintRange {
        sprint_id: 10,
        title: "Sprint A".to_string(),
        start: day(2024, 1, 10),
        end: day(2024, 1, 20),
    }
}
