use clap::Subcommand;

#[derive(Subcommand)]
pub enum BacklogCommands {
    /// Save a new story order; priorities become 1..N
    Reorder {
        /// Sprint the stories belong to (omit for the project backlog)
        #[arg(long)]
        sprint_id: Option<i64>,
        /// per_row or batch (defaults to client.reorder_mode)
        #[arg(long)]
        mode: Option<String>,
        /// Story IDs in the new order
        #[arg(required = true)]
        story_ids: Vec<i64>,
    },
}
