// --- File: crates/gobarber_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Backend API Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String, // e.g. http://localhost:3333, loaded via GOBARBER_API__BASE_URL
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_providers_path")]
    pub providers_path: String,
}

// --- Scheduling Screen Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchedulingConfig {
    /// Close the date picker as soon as a date is picked (modal pickers).
    /// Inline pickers stay open until toggled, so they set this to `false`.
    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss_date_picker: bool,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_date_picker: default_auto_dismiss(),
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // API config is mandatory
    pub api: ApiConfig,

    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_providers_path() -> String {
    "providers".to_string()
}

fn default_auto_dismiss() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
