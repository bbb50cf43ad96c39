//! Token storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which storage primitive holds the credential.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Kept in memory for the lifetime of the process.
    Session,
    /// Persisted to a key/value file and survives restarts.
    #[default]
    Durable,
}

/// Configuration for the token store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub storage: StorageKind,

    /// Key the credential is stored under (also the dashboard cookie name).
    #[serde(default = "default_key")]
    pub key: String,

    /// Backing file for durable storage.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::default(),
            key: default_key(),
            file: default_file(),
        }
    }
}

fn default_key() -> String {
    "authToken".to_string()
}

fn default_file() -> PathBuf {
    PathBuf::from(".hourly/session.json")
}
