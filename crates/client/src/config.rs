use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Total attempt budget per call, including the first attempt.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between attempts in milliseconds. No jitter.
    #[serde(default = "default_retry_delay_ms")]
    pub delay_ms: u64,

    /// Whether 401 responses count as transient. The backend's user
    /// record can lag right after account creation, so the legacy
    /// client retried these; disable to treat auth failures as final.
    #[serde(default = "default_retry_unauthorized")]
    pub retry_unauthorized: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Interval between unread-count polls in seconds.
    #[serde(default = "default_unread_interval")]
    pub unread_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Delay before the best-effort refetch that reconciles the pet list
    /// after a successful create, in milliseconds.
    #[serde(default = "default_reconcile_delay_ms")]
    pub reconcile_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SessionConfig {
    /// Override for the session file path. Defaults to the platform
    /// data directory when unset.
    #[serde(default)]
    pub file: Option<String>,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_request_timeout() -> u64 {
    10
}
fn default_max_attempts() -> u32 {
    3
}
fn default_retry_delay_ms() -> u64 {
    1000
}
fn default_retry_unauthorized() -> bool {
    true
}
fn default_unread_interval() -> u64 {
    60
}
fn default_reconcile_delay_ms() -> u64 {
    1000
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_retry_delay_ms(),
            retry_unauthorized: default_retry_unauthorized(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            unread_interval_secs: default_unread_interval(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            reconcile_delay_ms: default_reconcile_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration (optional, defaults apply)
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with PT__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("PT").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.base_url.is_empty() {
            return Err(ConfigValidationError::InvalidValue(
                "backend.base_url cannot be empty".to_string(),
            ));
        }

        if self.retry.max_attempts == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }

        if self.polling.unread_interval_secs == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "polling.unread_interval_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.request_timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry.delay_ms)
    }

    pub fn unread_interval(&self) -> Duration {
        Duration::from_secs(self.polling.unread_interval_secs)
    }

    pub fn reconcile_delay(&self) -> Duration {
        Duration::from_millis(self.dashboard.reconcile_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            retry: RetryConfig::default(),
            polling: PollingConfig::default(),
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
            session: SessionConfig::default(),
        }
    }
}
