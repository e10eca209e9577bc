use clap::Subcommand;

#[derive(Subcommand)]
pub enum LookupCommands {
    /// Get a project by ID
    Project {
        /// Project ID
        id: i64,
    },
    /// List milestones of a project
    Milestones {
        #[arg(long)]
        project_id: i64,
    },
    /// List stories
    Stories {
        #[arg(long)]
        project_id: Option<i64>,
        /// Sprint ID, or "null" for the project backlog
        #[arg(long)]
        sprint_id: Option<String>,
    },
    /// List users
    Users {
        #[arg(long)]
        username: Option<String>,
    },
}
