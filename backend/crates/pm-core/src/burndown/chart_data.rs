use crate::Sprint;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const SERIES_IDEAL: &str = "Ideal";
pub const SERIES_ACTUAL: &str = "Actual";

/// Sprint header shown above the burndown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSprint {
    pub id: i64,
    pub title: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

impl From<&Sprint> for ChartSprint {
    fn from(s: &Sprint) -> Self {
        Self {
            id: s.id,
            title: s.title.clone(),
            date_start: s.date_start,
            date_end: s.date_end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintStatistics {
    /// Calendar days, start and end included
    pub sprint_days: u32,
    /// Days that are neither excluded nor skipped weekends
    pub work_days: u32,
    pub tasks_per_day_ideal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: NaiveDate,
    pub y: f64,
    #[serde(default)]
    pub not_planned_day: bool,
    /// First day folded into this point when non-working days precede it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_x: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub name_short: String,
    pub data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    /// Share of the whole in percent
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Response of `GET /Sprint/ChartDataTasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataTasks {
    pub sprint: ChartSprint,
    pub init_tasks: u32,
    pub point_start: NaiveDate,
    pub statistics: SprintStatistics,
    pub chart_data: Vec<ChartSeries>,
    pub chart_data_phases: Vec<PieSlice>,
    pub chart_data_task_types: Vec<PieSlice>,
}
