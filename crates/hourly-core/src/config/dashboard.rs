//! Dashboard configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the web dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Host to bind the dashboard to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Lifetime of the token cookie, in seconds.
    #[serde(default = "default_cookie_max_age")]
    pub cookie_max_age_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cookie_max_age_secs: default_cookie_max_age(),
        }
    }
}

impl DashboardConfig {
    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cookie_max_age() -> u64 {
    86400
}
