//! Access roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The role a user acts under. Determines route access and the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages users and competencies.
    Admin,
    /// Manages projects and tasks, views reports.
    Manager,
    /// Logs time entries against assigned tasks.
    Executor,
}

impl Role {
    /// All roles, in precedence order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Executor];

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Executor => "executor",
        }
    }

    /// Derive a role from the backend's boolean flags.
    ///
    /// Admin wins over manager; neither flag means executor.
    pub fn from_flags(is_admin: bool, is_manager: bool) -> Self {
        if is_admin {
            Role::Admin
        } else if is_manager {
            Role::Manager
        } else {
            Role::Executor
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role string that is not one of the recognised roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0:?}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "executor" => Ok(Role::Executor),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}
