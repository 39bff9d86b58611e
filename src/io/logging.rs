use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "TICKLIST_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log filter {directive:?}: {source}")]
    Filter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("could not install logger: {0}")]
    Install(String),
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
}

/// Decide whether to log at all. A file always wins; without one, stderr is
/// used only when `TICKLIST_LOG` is set and the caller can spare stderr
/// (the TUI cannot).
pub fn choose_sink(file: Option<&Path>, env_set: bool, stderr_ok: bool) -> Option<LogSink> {
    match file {
        Some(path) => Some(LogSink::File(path.to_path_buf())),
        None if env_set && stderr_ok => Some(LogSink::Stderr),
        None => None,
    }
}

/// A blank `TICKLIST_LOG` counts as unset
pub fn env_directive(raw: Option<String>) -> Option<String> {
    raw.filter(|d| !d.trim().is_empty())
}

/// `TICKLIST_LOG` beats the configured level, which beats `info`
pub fn resolve_directive(env: Option<String>, level: Option<&str>) -> String {
    env.or_else(|| level.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

fn build_filter(directive: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(directive).map_err(|e| LogError::Filter {
        directive: directive.to_string(),
        source: e,
    })
}

fn open_log(path: &Path) -> Result<File, LogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::Open {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Install the global tracing subscriber. Returns false when logging stays off.
pub fn init_logging(
    file: Option<&Path>,
    level: Option<&str>,
    stderr_ok: bool,
) -> Result<bool, LogError> {
    let env = env_directive(std::env::var(LOG_ENV).ok());
    let Some(sink) = choose_sink(file, env.is_some(), stderr_ok) else {
        return Ok(false);
    };
    let filter = build_filter(&resolve_directive(env, level))?;

    let installed = match sink {
        LogSink::File(path) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(open_log(&path)?))
            .try_init(),
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    installed.map_err(|e| LogError::Install(e.to_string()))?;
    Ok(true)
}
