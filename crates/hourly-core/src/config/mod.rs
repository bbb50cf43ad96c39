//! Configuration types for Hourly.
//!
//! A single YAML file (conventionally `hourly.yaml`) configures the REST
//! backend, the dashboard listener, where the session token is kept, an
//! optional offline demo directory and the log level. Every section has
//! defaults, so an empty file is a valid configuration.

pub mod api;
pub mod dashboard;
pub mod session;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::identity::UserRecord;

pub use api::ApiConfig;
pub use dashboard::DashboardConfig;
pub use session::{SessionConfig, StorageKind};

/// Complete Hourly configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyConfig {
    /// REST backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Web dashboard settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Token storage settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Offline user directory. When it lists users, the backend is not contacted.
    #[serde(default)]
    pub demo: DemoConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Offline demo directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub users: Vec<DemoUser>,
}

impl DemoConfig {
    /// Whether demo mode is active.
    pub fn is_enabled(&self) -> bool {
        !self.users.is_empty()
    }
}

/// A user in the demo directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoUser {
    #[serde(flatten)]
    pub record: UserRecord,

    /// Password accepted by demo login. No password means any password is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
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

fn default_log_level() -> String {
    "info".to_string()
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HourlyConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as null rather than an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Config("api.base_url must not be empty".into()));
        }
        if self.session.key.trim().is_empty() {
            return Err(ConfigError::Config("session.key must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_is_default() {
        let config = HourlyConfig::from_yaml("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5100");
        assert_eq!(config.dashboard.port, 8080);
        assert_eq!(config.session.key, "authToken");
        assert_eq!(config.session.storage, StorageKind::Durable);
        assert_eq!(config.logging.level, "info");
        assert!(!config.demo.is_enabled());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
api:
  base_url: https://hours.example.com/api
  timeout_secs: 3
dashboard:
  host: 0.0.0.0
  port: 9000
session:
  storage: session
  key: token
demo:
  users:
    - id: 1
      name: Root
      role: admin
      password: secret
    - id: 2
      login: pm
      isManager: true
logging:
  level: debug
"#;
        let config = HourlyConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.api.base_url, "https://hours.example.com/api");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.dashboard.host, "0.0.0.0");
        assert_eq!(config.dashboard.port, 9000);
        assert_eq!(config.session.storage, StorageKind::Session);
        assert_eq!(config.session.key, "token");
        assert_eq!(config.logging.level, "debug");

        assert_eq!(config.demo.users.len(), 2);
        assert_eq!(config.demo.users[0].password.as_deref(), Some("secret"));
        assert_eq!(config.demo.users[0].record.role.as_deref(), Some("admin"));
        assert!(config.demo.users[1].record.is_manager);
        assert_eq!(config.demo.users[1].record.login.as_deref(), Some("pm"));
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let err = HourlyConfig::from_yaml("session:\n  key: \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dashboard:\n  port: 8181").unwrap();

        let config = HourlyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.dashboard.port, 8181);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = HourlyConfig::load(None).unwrap();
        assert_eq!(config.dashboard.port, 8080);
    }
}
