pub mod burndown_chart;
pub mod format;
pub mod pie_chart;
pub mod tooltip;
