pub mod chart_data;
pub mod sprint_delete_response;
pub mod sprint_forms;
pub mod sprint_list_response;
pub mod sprint_queries;
pub mod sprint_response;
pub mod sprints;
