pub mod connection;
pub mod data_service;
pub mod error;
pub mod query_filter;
pub mod repositories;

mod rows;


pub use connection::pool::{create_memory_pool, create_pool, run_migrations};
pub use data_service::DataService;
pub use error::{DbError, Result};
pub use query_filter::{FilterValue, QueryFilter};
pub use repositories::exclude_sprint_day_repository::ExcludeSprintDayRepository;
pub use repositories::milestone_repository::MilestoneRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::sprint_repository::SprintRepository;
pub use repositories::story_repository::StoryRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;
