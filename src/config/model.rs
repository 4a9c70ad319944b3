//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the calculator works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_tape: bool,
    #[serde(default = "default_max_tape_entries")]
    pub max_tape_entries: usize,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_tape: true,
            max_tape_entries: default_max_tape_entries(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Front-end behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Ring the terminal bell when a calculation fails.
    #[serde(default)]
    pub bell_on_error: bool,
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_max_tape_entries() -> usize {
    200
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_log_file() -> String {
    "~/.local/share/crabcalc/crabcalc.log".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
