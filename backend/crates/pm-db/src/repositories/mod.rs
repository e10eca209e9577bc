pub mod exclude_sprint_day_repository;
pub mod milestone_repository;
pub mod project_repository;
pub mod sprint_repository;
pub mod story_repository;
pub mod task_repository;
pub mod user_repository;
