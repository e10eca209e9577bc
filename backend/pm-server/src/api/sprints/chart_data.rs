use crate::{ApiResult, AppState, ChartDataQuery};

use pm_core::{BurndownInput, ChartDataTasks, build_chart_data};
use pm_db::{DbError, ExcludeSprintDayRepository, SprintRepository, TaskRepository};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::Utc;

/// GET /Sprint/ChartDataTasks?sprintId=1
///
/// Burndown series and pie data of a sprint. The actual series ends today.
pub async fn chart_data_tasks(
    State(state): State<AppState>,
    query: Result<Query<ChartDataQuery>, QueryRejection>,
) -> ApiResult<Json<ChartDataTasks>> {
    let Query(ChartDataQuery { sprint_id }) = query?;

    let sprint = SprintRepository::new(state.pool.clone())
        .find_by_id(sprint_id)
        .await?
        .ok_or_else(|| DbError::not_found("Sprint", sprint_id))?;

    let exclude_days: Vec<_> = ExcludeSprintDayRepository::new(state.pool.clone())
        .find_by_sprint(sprint_id)
        .await?
        .into_iter()
        .map(|d| d.day)
        .collect();

    let tasks_repo = TaskRepository::new(state.pool.clone());
    let tasks = tasks_repo.find_by_sprint(sprint_id).await?;
    let phase_durations = tasks_repo.find_phase_durations_by_sprint(sprint_id).await?;

    let data = build_chart_data(&BurndownInput {
        sprint: &sprint,
        exclude_days: &exclude_days,
        tasks: &tasks,
        phase_durations: &phase_durations,
        today: Utc::now().date_naive(),
    });

    log::debug!(
        "Chart data for sprint {}: {} tasks over {} work days",
        sprint_id,
        data.init_tasks,
        data.statistics.work_days
    );

    Ok(Json(data))
}
