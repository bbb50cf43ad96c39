//! Error types for the guard crate.

use hourly_core::Role;
use thiserror::Error;

/// A route table that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("login route not found: {0}")]
    MissingLogin(String),

    #[error("login route {0} must not require authentication")]
    ProtectedLogin(String),

    #[error("landing route not found: {0}")]
    MissingLanding(String),

    #[error("landing route {path} is not open to {role}")]
    ForeignLanding { role: Role, path: String },
}
