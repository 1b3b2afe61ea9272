use std::path::PathBuf;

use clap::ValueEnum;

/// How command results reach stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns; `summary` adds drawn bars.
    Table,
    /// Single-line JSON.
    Raw,
}

/// Flags every command handler sees, wherever they appeared on the line.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub data_dir: Option<PathBuf>,
}
