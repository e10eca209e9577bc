//! Read gateway for the entities shown in the sprint screens.
//!
//! Single lookups turn a missing row into `DbError::NotFound`; collection
//! lookups return an empty vector when nothing matches. Query failures are
//! passed through unchanged.

use crate::{
    DbError, MilestoneRepository, ProjectRepository, QueryFilter, Result as DbErrorResult,
    SprintRepository, StoryRepository, UserRepository,
};

use pm_core::{Milestone, Project, Sprint, Story, User};

use sqlx::SqlitePool;

pub struct DataService {
    projects: ProjectRepository,
    milestones: MilestoneRepository,
    sprints: SprintRepository,
    stories: StoryRepository,
    users: UserRepository,
}

impl DataService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            projects: ProjectRepository::new(pool.clone()),
            milestones: MilestoneRepository::new(pool.clone()),
            sprints: SprintRepository::new(pool.clone()),
            stories: StoryRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn get_project(&self, id: i64) -> DbErrorResult<Project> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Project", id))
    }

    pub async fn get_milestones(&self, filter: &QueryFilter) -> DbErrorResult<Vec<Milestone>> {
        self.milestones.find(filter).await
    }

    pub async fn get_sprints(&self, filter: &QueryFilter) -> DbErrorResult<Vec<Sprint>> {
        self.sprints.find(filter).await
    }

    pub async fn get_stories(&self, filter: &QueryFilter) -> DbErrorResult<Vec<Story>> {
        self.stories.find(filter).await
    }

    pub async fn get_users(&self, filter: &QueryFilter) -> DbErrorResult<Vec<User>> {
        self.users.find(filter).await
    }
}
