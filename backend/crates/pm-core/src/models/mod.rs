pub mod exclude_sprint_day;
pub mod exclude_sprint_day_dto;
pub mod milestone;
pub mod milestone_dto;
pub mod project;
pub mod project_dto;
pub mod sprint;
pub mod sprint_dto;
pub mod sprint_form_model;
pub mod story;
pub mod story_dto;
pub mod task;
pub mod user;
pub mod user_dto;
