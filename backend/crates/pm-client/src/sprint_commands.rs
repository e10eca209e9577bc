use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum SprintCommands {
    /// Add a sprint to a project
    Add {
        #[arg(long)]
        project_id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// First sprint day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last sprint day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        #[arg(long)]
        ignore_weekends: bool,
    },
    /// Edit a sprint; omitted fields keep their value
    Edit {
        /// Sprint ID
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        ignore_weekends: Option<bool>,
    },
    /// Delete a sprint, moving its stories to the project backlog
    Delete {
        /// Sprint ID
        id: i64,
    },
    /// Show the edit form data of a sprint
    Show {
        /// Sprint ID
        id: i64,
        /// details, backlog, charts or exclude_days
        #[arg(long, default_value = "details")]
        tab: String,
    },
    /// List sprints of a project
    List {
        #[arg(long)]
        project_id: i64,
    },
}
