use crate::SprintRange;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: i64,
    pub project_id: i64,

    pub title: String,
    pub description: Option<String>,

    pub date_start: NaiveDate,
    pub date_end: NaiveDate,

    /// Saturdays and Sundays do not count as work days
    pub ignore_weekends: bool,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    pub fn range(&self) -> SprintRange {
        SprintRange {
            sprint_id: self.id,
            title: self.title.clone(),
            start: self.date_start,
            end: self.date_end,
        }
    }

    /// Every calendar day of the sprint, start and end included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.date_start
            .iter_days()
            .take_while(move |day| *day <= self.date_end)
    }

    /// Whether `day` is skipped because of the weekend setting.
    pub fn is_weekend_off(&self, day: NaiveDate) -> bool {
        self.ignore_weekends && matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Sprint values before the database has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSprint {
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub ignore_weekends: bool,
}
