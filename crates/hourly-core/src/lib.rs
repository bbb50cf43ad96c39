//! # hourly-core
//!
//! Shared vocabulary for the Hourly time-tracking front-end.
//!
//! - [`Role`]: the three access levels (admin, manager, executor)
//! - [`UserRecord`]: a user as returned by the REST backend
//! - [`UserIdentity`]: the normalized `{ id, name, role }` the guard works with
//! - [`config`]: the YAML configuration consumed by the CLI and the dashboard

// Configuration types shared across all Hourly crates
pub mod config;
pub mod identity;
pub mod role;

pub use config::{
    ApiConfig, ConfigError, DashboardConfig, DemoConfig, DemoUser, HourlyConfig, LoggingConfig,
    SessionConfig, StorageKind,
};
pub use identity::{UserId, UserIdentity, UserRecord};
pub use role::{Role, RoleParseError};
