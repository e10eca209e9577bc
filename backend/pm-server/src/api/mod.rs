pub mod csrf;
pub mod delete_response;
pub mod error;
pub mod exclude_days;
pub mod extractors;
pub mod milestones;
pub mod projects;
pub mod sprints;
pub mod stories;
pub mod users;
