pub mod backlog_reorder;
pub mod chart_dashboard;
pub mod exclude_day;
pub mod sprint_form;
