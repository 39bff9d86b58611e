use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::config::Config;
use crate::model::intent::Intent;
use crate::model::store::TaskListStore;
use crate::model::task::Task;
use crate::ops::task_ops::TaskError;

/// Error type for the replay command
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not read intents: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Intent {
        line: usize,
        source: serde_json::Error,
    },
    #[error("seed is not a JSON task array: {0}")]
    SeedFormat(serde_json::Error),
    #[error("invalid seed: {0}")]
    Seed(#[from] TaskError),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a subcommand. The no-subcommand case (TUI) is handled in main.rs.
pub fn dispatch(command: Commands, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Replay(args) => cmd_replay(args, config),
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Parse JSON-line intents. Blank lines and `#` comments are skipped; each
/// intent keeps its 1-based line number for diagnostics.
pub fn parse_intents(reader: impl BufRead) -> Result<Vec<(usize, Intent)>, ReplayError> {
    let mut intents = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let intent = serde_json::from_str(trimmed).map_err(|e| ReplayError::Intent {
            line: idx + 1,
            source: e,
        })?;
        intents.push((idx + 1, intent));
    }
    Ok(intents)
}

/// Load a seed list: a JSON array of `{id, text, completed}` objects
pub fn read_seed(path: &Path) -> Result<Vec<Task>, ReplayError> {
    let text = fs::read_to_string(path).map_err(|e| ReplayError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(ReplayError::SeedFormat)
}

/// Apply intents in order. Returns the line numbers of intents that
/// changed nothing.
pub fn replay(store: &mut TaskListStore, intents: &[(usize, Intent)]) -> Vec<usize> {
    let mut ignored = Vec::new();
    for (line, intent) in intents {
        if !store.apply(intent) {
            ignored.push(*line);
        }
    }
    ignored
}

fn cmd_replay(args: ReplayArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let style = config.ids.style;
    let mut store = match &args.seed {
        Some(path) => {
            TaskListStore::with_tasks(style, read_seed(path)?).map_err(ReplayError::from)?
        }
        None => TaskListStore::new(style),
    };

    let intents = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| ReplayError::Read {
                path: path.clone(),
                source: e,
            })?;
            parse_intents(BufReader::new(file))?
        }
        None => parse_intents(io::stdin().lock())?,
    };
    tracing::info!(count = intents.len(), "replaying intents");

    let ignored = replay(&mut store, &intents);
    if args.strict {
        for line in &ignored {
            eprintln!("warning: line {}: intent had no effect", line);
        }
    }

    let snapshot = store.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for line in format_snapshot(&snapshot) {
            println!("{}", line);
        }
    }
    Ok(())
}
