use clap::Subcommand;

use crate::cli::subcommands::TaskCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Task management.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Per-status counts and dashboard bars.
    Summary,
}
