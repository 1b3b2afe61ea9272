use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// `splan`: plan the day's tasks and see how far along they are.
#[derive(Debug, Parser)]
#[command(name = "splan", version, about = "SysPlanner daily task planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// How results are printed
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Most tasks `task list` prints (default: general.default_limit)
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log store and file activity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read and write tasks.jsonl in this directory instead
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
        }
    }
}
