use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        /// Day of the task, YYYY-MM-DD.
        #[arg(long)]
        date: String,
        /// Time of day, HH:MM (24-hour).
        #[arg(long)]
        time: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a task.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task.
    Delete { id: String },
    /// Mark a task completed.
    Complete { id: String },
    /// Get a task by ID.
    Get { id: String },
    /// List tasks.
    List {
        #[arg(long)]
        status: Option<String>,
        /// Only tasks on this day, YYYY-MM-DD.
        #[arg(long, conflicts_with = "today")]
        date: Option<String>,
        /// Only tasks scheduled for today.
        #[arg(long)]
        today: bool,
        #[arg(long)]
        search: Option<String>,
    },
}
