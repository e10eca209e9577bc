use crate::{BurndownChart, PieChart};

/// Draws charts prepared by the chart dashboard.
pub trait ChartRenderer: Send + Sync {
    fn render_burndown(&self, chart: &BurndownChart);

    fn render_pie(&self, chart: &PieChart);
}
