use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub ids: IdConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Input placeholder while adding a task
    #[serde(default = "default_add_placeholder")]
    pub add_placeholder: String,
    /// Input placeholder while editing a task
    #[serde(default = "default_edit_placeholder")]
    pub edit_placeholder: String,
    /// Theme overrides, e.g. `background = "#000000"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            add_placeholder: default_add_placeholder(),
            edit_placeholder: default_edit_placeholder(),
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_add_placeholder() -> String {
    "Add a new task".to_string()
}

fn default_edit_placeholder() -> String {
    "Edit task".to_string()
}

/// How fresh task ids are produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStyle {
    /// Creation time in milliseconds, strictly increasing
    #[default]
    Timestamp,
    /// 1, 2, 3, ...
    Counter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdConfig {
    #[serde(default)]
    pub style: IdStyle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file; logging stays off when neither this nor --log-file is set
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// tracing filter directive, e.g. "debug" or "ticklist=trace"
    #[serde(default)]
    pub level: Option<String>,
}
