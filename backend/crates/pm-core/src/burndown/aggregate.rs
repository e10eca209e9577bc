use crate::{
    ChartDataTasks, ChartPoint, ChartSeries, ChartSprint, PieSlice, SERIES_ACTUAL, SERIES_IDEAL,
    Sprint, SprintStatistics, Task, TaskPhaseDuration,
};

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

pub struct BurndownInput<'a> {
    pub sprint: &'a Sprint,
    pub exclude_days: &'a [NaiveDate],
    /// Tasks of every story in the sprint
    pub tasks: &'a [Task],
    pub phase_durations: &'a [TaskPhaseDuration],
    /// Actual series stops here
    pub today: NaiveDate,
}

/// Day of the sprint and whether work is planned on it.
struct SprintDay {
    day: NaiveDate,
    planned: bool,
}

pub fn build_chart_data(input: &BurndownInput<'_>) -> ChartDataTasks {
    let sprint = input.sprint;
    let excluded: BTreeSet<NaiveDate> = input.exclude_days.iter().copied().collect();

    let days: Vec<SprintDay> = sprint
        .days()
        .map(|day| SprintDay {
            day,
            planned: !excluded.contains(&day) && !sprint.is_weekend_off(day),
        })
        .collect();

    let sprint_days = days.len() as u32;
    let work_days = days.iter().filter(|d| d.planned).count() as u32;
    let init_tasks = input.tasks.len() as u32;
    let tasks_per_day_ideal = if work_days == 0 {
        0.0
    } else {
        f64::from(init_tasks) / f64::from(work_days)
    };

    ChartDataTasks {
        sprint: ChartSprint::from(sprint),
        init_tasks,
        point_start: sprint.date_start,
        statistics: SprintStatistics {
            sprint_days,
            work_days,
            tasks_per_day_ideal,
        },
        chart_data: vec![
            ideal_series(&days, init_tasks, tasks_per_day_ideal),
            actual_series(&days, input.tasks, sprint.date_end.min(input.today)),
        ],
        chart_data_phases: phase_slices(input.phase_durations),
        chart_data_task_types: task_type_slices(input.tasks),
    }
}

fn ideal_series(days: &[SprintDay], init_tasks: u32, rate: f64) -> ChartSeries {
    let mut remaining = f64::from(init_tasks);
    let data = days
        .iter()
        .map(|d| {
            if d.planned {
                remaining = (remaining - rate).max(0.0);
            }
            ChartPoint {
                x: d.day,
                y: remaining,
                not_planned_day: !d.planned,
                previous_x: None,
            }
        })
        .collect();

    ChartSeries {
        name: format!("{} burndown", SERIES_IDEAL),
        name_short: SERIES_IDEAL.to_string(),
        data,
    }
}

fn actual_series(days: &[SprintDay], tasks: &[Task], last_day: NaiveDate) -> ChartSeries {
    let mut data = Vec::new();
    let mut gap_start: Option<NaiveDate> = None;

    for d in days.iter().take_while(|d| d.day <= last_day) {
        if !d.planned {
            gap_start.get_or_insert(d.day);
            continue;
        }

        let done = tasks
            .iter()
            .filter(|t| t.done_on.is_some_and(|done_on| done_on <= d.day))
            .count();

        data.push(ChartPoint {
            x: d.day,
            y: (tasks.len() - done) as f64,
            not_planned_day: false,
            previous_x: gap_start.take(),
        });
    }

    ChartSeries {
        name: format!("{} burndown", SERIES_ACTUAL),
        name_short: SERIES_ACTUAL.to_string(),
        data,
    }
}

fn phase_slices(durations: &[TaskPhaseDuration]) -> Vec<PieSlice> {
    let mut per_phase: BTreeMap<&str, i64> = BTreeMap::new();
    for d in durations {
        *per_phase.entry(d.phase.as_str()).or_default() += d.duration_seconds.max(0);
    }

    let total: i64 = per_phase.values().sum();
    if total == 0 {
        return Vec::new();
    }

    per_phase
        .into_iter()
        .map(|(phase, seconds)| PieSlice {
            name: phase.to_string(),
            y: seconds as f64 / total as f64 * 100.0,
            duration: Some(seconds),
            count: None,
        })
        .collect()
}

fn task_type_slices(tasks: &[Task]) -> Vec<PieSlice> {
    let mut per_type: BTreeMap<&str, u32> = BTreeMap::new();
    for t in tasks {
        *per_type.entry(t.task_type.as_str()).or_default() += 1;
    }

    let total = tasks.len() as f64;
    per_type
        .into_iter()
        .map(|(task_type, count)| PieSlice {
            name: task_type.to_string(),
            y: f64::from(count) / total * 100.0,
            duration: None,
            count: Some(count),
        })
        .collect()
}
