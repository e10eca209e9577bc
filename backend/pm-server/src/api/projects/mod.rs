pub mod project_response;
pub mod projects;
