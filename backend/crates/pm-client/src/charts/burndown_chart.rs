//! Burndown line chart built from `GET /Sprint/ChartDataTasks`.

use crate::charts::format::format_number;
use crate::charts::tooltip::{Tooltip, TooltipRow, TooltipSection};

use pm_core::{ChartDataTasks, ChartPoint, ChartSeries, SERIES_ACTUAL, SERIES_IDEAL, format_date};

use chrono::NaiveDate;

pub const Y_AXIS_TITLE: &str = "Tasks remaining";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel {
    pub text: String,
    /// Day after the sprint or skipped by the plan
    pub not_planned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BurndownChart {
    pub title: String,
    pub subtitle: String,
    pub y_axis_title: String,
    /// First day on the x axis
    pub x_min: NaiveDate,
    pub sprint_end: NaiveDate,
    /// Empty when the sprint has no tasks
    pub series: Vec<ChartSeries>,
    pub init_tasks: u32,
    pub tasks_per_day_ideal: f64,
    date_format: String,
}

impl BurndownChart {
    pub fn new(data: &ChartDataTasks, date_format: &str) -> Self {
        let sprint = &data.sprint;
        let title = format!(
            "{} - {} - {}",
            format_date(sprint.date_start, date_format),
            format_date(sprint.date_end, date_format),
            sprint.title
        );
        let subtitle = format!(
            "Sprint task burndown chart - duration {} days - {} working days ",
            data.statistics.sprint_days, data.statistics.work_days
        );

        let series = if data.init_tasks > 0 {
            data.chart_data.clone()
        } else {
            Vec::new()
        };

        Self {
            title,
            subtitle,
            y_axis_title: Y_AXIS_TITLE.to_string(),
            x_min: data.point_start,
            sprint_end: sprint.date_end,
            series,
            init_tasks: data.init_tasks,
            tasks_per_day_ideal: data.statistics.tasks_per_day_ideal,
            date_format: date_format.to_string(),
        }
    }

    /// Every x value present in some series, ascending and deduplicated.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self
            .series
            .iter()
            .flat_map(|s| s.data.iter().map(|p| p.x))
            .collect();
        days.sort();
        days.dedup();
        days
    }

    /// Label for one tick; `None` hides ticks no series has a point for.
    pub fn axis_label(&self, x: NaiveDate) -> Option<AxisLabel> {
        if !self.series.iter().any(|s| s.data.iter().any(|p| p.x == x)) {
            return None;
        }

        let not_planned = x > self.sprint_end
            || self
                .series
                .iter()
                .find(|s| s.name_short == SERIES_ACTUAL || s.name_short == SERIES_IDEAL)
                .is_some_and(|s| s.data.iter().any(|p| p.x == x && p.not_planned_day));

        Some(AxisLabel {
            text: format_date(x, &self.date_format),
            not_planned,
        })
    }

    /// Shared tooltip for all series at `x`; `None` when nothing is plotted there.
    pub fn tooltip(&self, x: NaiveDate) -> Option<Tooltip> {
        let points: Vec<(&ChartSeries, &ChartPoint)> = self
            .series
            .iter()
            .filter_map(|s| s.data.iter().find(|p| p.x == x).map(|p| (s, p)))
            .collect();

        if points.is_empty() {
            return None;
        }

        let date_end = format_date(x, &self.date_format);
        let title = match points.iter().find_map(|(_, p)| p.previous_x) {
            Some(previous) if previous != x => {
                format!("{} - {}", format_date(previous, &self.date_format), date_end)
            }
            _ => date_end,
        };

        let remaining = points
            .iter()
            .map(|(s, p)| TooltipRow::new(s.name_short.as_str(), format_number(p.y)))
            .collect();

        let mut per_day = vec![TooltipRow::new(
            SERIES_IDEAL,
            format_number(self.tasks_per_day_ideal),
        )];

        if let Some((_, actual)) = points.iter().find(|(s, _)| s.name_short == SERIES_ACTUAL) {
            let days_so_far = (actual.x - self.x_min).num_days() + 1;
            if days_so_far > 0 {
                let done_per_day = (f64::from(self.init_tasks) - actual.y) / days_so_far as f64;
                if done_per_day != 0.0 {
                    per_day.push(TooltipRow::new(
                        SERIES_ACTUAL,
                        format!("{} ({} days)", format_number(done_per_day), days_so_far),
                    ));
                }
            }
        }

        Some(Tooltip {
            title,
            sections: vec![
                TooltipSection::new(Some(Y_AXIS_TITLE), remaining),
                TooltipSection::new(Some("Tasks per day"), per_day),
            ],
        })
    }
}
