use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ExcludeDayCommands {
    /// Exclude a day from a sprint's plan
    Add {
        #[arg(long)]
        sprint_id: i64,
        /// Day to exclude (YYYY-MM-DD)
        #[arg(long)]
        day: NaiveDate,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove an exclude day
    Remove {
        #[arg(long)]
        sprint_id: i64,
        /// Exclude day ID
        id: i64,
    },
}
