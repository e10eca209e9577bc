use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pm")]
#[command(about = "Sprint board CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to client.server_url from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// strftime pattern for dates in messages and charts
    #[arg(long, global = true)]
    pub(crate) date_format: Option<String>,

    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    pub(crate) yes: bool,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub(crate) verbose: bool,
}
