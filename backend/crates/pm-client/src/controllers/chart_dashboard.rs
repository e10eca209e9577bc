//! Charts tab of the sprint dialog.

use crate::{BurndownChart, Channel, ChartRenderer, ClientResult, Notifier, PieChart, PieKind};

use pm_core::{ChartDataTasks, Message};

use std::sync::Arc;

use log::debug;

/// Charts built from one fetch of the sprint statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SprintCharts {
    pub data: ChartDataTasks,
    pub burndown: BurndownChart,
    pub phases: PieChart,
    pub task_types: PieChart,
}

pub struct ChartDashboardController {
    channel: Arc<dyn Channel>,
    notifier: Arc<dyn Notifier>,
    renderer: Arc<dyn ChartRenderer>,
    date_format: String,
}

impl ChartDashboardController {
    pub fn new(
        channel: Arc<dyn Channel>,
        notifier: Arc<dyn Notifier>,
        renderer: Arc<dyn ChartRenderer>,
        date_format: impl Into<String>,
    ) -> Self {
        Self {
            channel,
            notifier,
            renderer,
            date_format: date_format.into(),
        }
    }

    /// Fetch the statistics of `sprint_id` and draw all three charts.
    pub async fn activate(&self, sprint_id: i64) -> ClientResult<SprintCharts> {
        let data = match self.fetch(sprint_id).await {
            Ok(data) => data,
            Err(e) => {
                self.notifier.notify(&Message::error(e.user_message()));
                return Err(e);
            }
        };

        let charts = self.build(data);
        self.renderer.render_burndown(&charts.burndown);
        self.renderer.render_pie(&charts.phases);
        self.renderer.render_pie(&charts.task_types);

        Ok(charts)
    }

    pub fn build(&self, data: ChartDataTasks) -> SprintCharts {
        debug!(
            "Charting sprint {}: {} tasks, {} series",
            data.sprint.id,
            data.init_tasks,
            data.chart_data.len()
        );

        SprintCharts {
            burndown: BurndownChart::new(&data, &self.date_format),
            phases: PieChart::new(PieKind::PhaseDurations, data.chart_data_phases.clone()),
            task_types: PieChart::new(PieKind::TaskTypes, data.chart_data_task_types.clone()),
            data,
        }
    }

    async fn fetch(&self, sprint_id: i64) -> ClientResult<ChartDataTasks> {
        let body = self
            .channel
            .get("/Sprint/ChartDataTasks", &[("sprintId", sprint_id.to_string())])
            .await?;
        Ok(serde_json::from_value(body)?)
    }
}
