pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    csrf::{csrf::csrf_token, csrf_response::CsrfResponse},
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    exclude_days::{
        create_exclude_day_request::CreateExcludeDayRequest,
        exclude_day_response::ExcludeDayResponse,
        exclude_days::{create_exclude_day, delete_exclude_day},
    },
    extractors::csrf_guard::{CSRF_HEADER, CsrfGuard},
    milestones::{milestone_list_response::MilestoneListResponse, milestones::list_milestones},
    projects::{project_response::ProjectResponse, projects::get_project},
    sprints::{
        chart_data::chart_data_tasks,
        sprint_delete_response::SprintDeleteResponse,
        sprint_forms::{add_form, edit_form},
        sprint_list_response::SprintListResponse,
        sprint_queries::{ChartDataQuery, EditFormQuery},
        sprint_response::SprintResponse,
        sprints::{create_sprint, delete_sprint, list_sprints, update_sprint},
    },
    stories::{
        priorities_response::PrioritiesResponse,
        stories::{list_stories, update_priorities, update_priority},
        story_list_response::StoryListResponse,
        story_response::StoryResponse,
        update_priorities_request::UpdatePrioritiesRequest,
        update_priority_request::UpdatePriorityRequest,
    },
    users::{user_list_response::UserListResponse, users::list_users},
};
pub use app_state::AppState;

pub use crate::routes::{build_router, build_router_with_limit};
