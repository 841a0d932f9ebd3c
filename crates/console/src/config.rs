use serde::Deserialize;

use domain::models::DivisionRoster;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    pub stats: StatsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_drain_timeout")]
    pub drain_timeout_secs: u64,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Length of the time-series window, ending today.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Restrict the drain to one division; empty means all.
    #[serde(default)]
    pub division: Option<String>,

    /// Division allow-list; empty falls back to the built-in roster.
    #[serde(default)]
    pub divisions: Vec<String>,
}

impl StatsConfig {
    pub fn roster(&self) -> DivisionRoster {
        if self.divisions.is_empty() {
            DivisionRoster::default()
        } else {
            DivisionRoster::new(self.divisions.iter().map(String::as_str))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_request_timeout() -> u64 {
    30
}
fn default_drain_timeout() -> u64 {
    120
}
fn default_page_size() -> usize {
    shared::pagination::DRAIN_PAGE_SIZE
}
fn default_window_days() -> u32 {
    23
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with TB__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("TB").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// Builds the config entirely from embedded defaults and overrides,
    /// without touching the file system.
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [backend]
            base_url = "http://localhost:3000"
            request_timeout_secs = 30
            drain_timeout_secs = 120
            page_size = 1000

            [stats]
            window_days = 23
            divisions = []

            [logging]
            level = "info"
            format = "pretty"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.base_url.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "TB__BACKEND__BASE_URL environment variable must be set".to_string(),
            ));
        }

        if self.backend.page_size == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "page_size cannot be 0".to_string(),
            ));
        }

        if self.stats.window_days == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "window_days cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}
