mod burndown_chart;

use pm_core::{ChartDataTasks, ChartPoint, ChartSeries, ChartSprint, SprintStatistics};

use chrono::NaiveDate;

pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn point(x: NaiveDate, y: f64, not_planned_day: bool) -> ChartPoint {
    ChartPoint {
        x,
        y,
        not_planned_day,
        previous_x: None,
    }
}

/// Mon 2024-01-08 .. Fri 2024-01-12 with 4 tasks; Wednesday excluded.
pub(crate) fn chart_data(init_tasks: u32) -> ChartDataTasks {
    ChartDataTasks {
        sprint: ChartSprint {
            id: 7,
            title: "Sprint 7".to_string(),
            date_start: day(2024, 1, 8),
            date_end: day(2024, 1, 12),
        },
        init_tasks,
        point_start: day(2024, 1, 8),
        statistics: SprintStatistics {
            sprint_days: 5,
            work_days: 4,
            tasks_per_day_ideal: 1.0,
        },
        chart_data: vec![
            ChartSeries {
                name: "Ideal burndown".to_string(),
                name_short: "Ideal".to_string(),
                data: vec![
                    point(day(2024, 1, 8), 4.0, false),
                    point(day(2024, 1, 9), 3.0, false),
                    point(day(2024, 1, 10), 3.0, true),
                    point(day(2024, 1, 11), 2.0, false),
                    point(day(2024, 1, 12), 1.0, false),
                ],
            },
            ChartSeries {
                name: "Actual burndown".to_string(),
                name_short: "Actual".to_string(),
                data: vec![
                    point(day(2024, 1, 8), 4.0, false),
                    point(day(2024, 1, 9), 3.0, false),
                    ChartPoint {
                        previous_x: Some(day(2024, 1, 10)),
                        ..point(day(2024, 1, 11), 2.0, false)
                    },
                ],
            },
        ],
        chart_data_phases: Vec::new(),
        chart_data_task_types: Vec::new(),
    }
}
