use crate::{
    backlog_commands::BacklogCommands, exclude_day_commands::ExcludeDayCommands,
    lookup_commands::LookupCommands, sprint_commands::SprintCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sprint operations
    Sprint {
        #[command(subcommand)]
        action: SprintCommands,
    },

    /// Sprint backlog operations
    Backlog {
        #[command(subcommand)]
        action: BacklogCommands,
    },

    /// Burndown and pie charts of a sprint
    Charts {
        /// Sprint ID
        sprint_id: i64,
    },

    /// Sprint exclude day operations
    ExcludeDay {
        #[command(subcommand)]
        action: ExcludeDayCommands,
    },

    #[command(flatten)]
    Lookup(LookupCommands),
}
