use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub preferences: PreferenceSettings,
    #[serde(default)]
    pub interest: InterestSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    #[serde(default = "default_manufacturers_url")]
    pub manufacturers_url: String,
    #[serde(default = "default_models_url")]
    pub models_url: String,
    #[serde(default = "default_categories_url")]
    pub categories_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            manufacturers_url: default_manufacturers_url(),
            models_url: default_models_url(),
            categories_url: default_categories_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_manufacturers_url() -> String { "http://localhost:3000/api/manufacturers".to_string() }
fn default_models_url() -> String { "http://localhost:3000/api/models".to_string() }
fn default_categories_url() -> String { "http://localhost:3000/api/categories".to_string() }
fn default_timeout_secs() -> u64 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct PreferenceSettings {
    #[serde(default = "default_preference_path")]
    pub path: String,
    /// Truncate the durable record before loading it
    #[serde(default)]
    pub clear_on_start: bool,
}

impl Default for PreferenceSettings {
    fn default() -> Self {
        Self {
            path: default_preference_path(),
            clear_on_start: false,
        }
    }
}

fn default_preference_path() -> String { "pref.csv".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct InterestSettings {
    #[serde(default = "default_soft_weight")]
    pub soft: f64,
    #[serde(default = "default_hard_weight")]
    pub hard: f64,
}

impl Default for InterestSettings {
    fn default() -> Self {
        Self {
            soft: default_soft_weight(),
            hard: default_hard_weight(),
        }
    }
}

fn default_soft_weight() -> f64 { 0.5 }
fn default_hard_weight() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.overridden_by(std::env::var("LOG_LEVEL").ok(), std::env::var("LOG_FORMAT").ok())
    }

    /// Replace each field that has a non-empty override
    pub fn overridden_by(mut self, level: Option<String>, format: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level;
        }
        if let Some(format) = format.filter(|f| !f.trim().is_empty()) {
            self.format = format;
        }
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.format.trim().eq_ignore_ascii_case("pretty")
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CATALOG__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CATALOG__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CATALOG")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
