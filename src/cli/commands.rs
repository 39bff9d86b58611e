use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] ticklist v", env!("CARGO_PKG_VERSION"), " - one screen, one list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: $TICKLIST_CONFIG, then <config dir>/ticklist/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file (filter with $TICKLIST_LOG, e.g. "debug")
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply intents (one JSON object per line) and print the resulting list
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Intent file (default: stdin)
    pub file: Option<PathBuf>,
    /// JSON array of tasks to start from
    #[arg(long)]
    pub seed: Option<PathBuf>,
    /// Output the final state as JSON
    #[arg(long)]
    pub json: bool,
    /// Report intents that changed nothing on stderr
    #[arg(long)]
    pub strict: bool,
}
