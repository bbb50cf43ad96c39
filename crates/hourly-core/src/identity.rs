//! User records and the identity derived from them.
//!
//! The backend has historically exposed role information in two shapes:
//! an explicit `role` string, or a pair of boolean flags. Both the
//! snake_case (`is_admin`, `is_manager`) and camelCase (`isAdmin`,
//! `isManager`) spellings are accepted on input; [`UserRecord::normalized`]
//! is the single place a role is derived from them.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::{Role, RoleParseError};

/// Identifier of a user in the backend.
///
/// The backend emits ids as integers, tokens sometimes carry them as
/// strings; both deserialize to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user id. Returns `None` for an empty or blank string.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    /// The id as it appears in URLs.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        let id = match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Signed(n) => n.to_string(),
            Raw::Unsigned(n) => n.to_string(),
        };
        UserId::new(id).ok_or_else(|| de::Error::custom("user id must not be empty"))
    }
}

/// A user record as returned by `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Explicit role, when the backend provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, alias = "isAdmin")]
    pub is_admin: bool,

    #[serde(default, alias = "isManager")]
    pub is_manager: bool,
}

impl UserRecord {
    /// Create a record with no role information (resolves to executor).
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: None,
            login: None,
            role: None,
            is_admin: false,
            is_manager: false,
        }
    }

    /// Fill in the `role` field.
    ///
    /// An explicit, non-blank role is kept (trimmed). Otherwise the role is
    /// derived from the boolean flags, defaulting to executor. Applying this
    /// to an already-normalized record returns it unchanged.
    pub fn normalized(mut self) -> Self {
        let explicit = self
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        self.role = Some(explicit.unwrap_or_else(|| {
            Role::from_flags(self.is_admin, self.is_manager)
                .as_str()
                .to_string()
        }));
        self
    }

    /// Name to show in the UI: `name`, then `login`, then the id.
    pub fn display_name(&self) -> String {
        [self.name.as_deref(), self.login.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// The resolved identity of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

impl UserIdentity {
    pub fn new(id: UserId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
        }
    }
}

impl TryFrom<UserRecord> for UserIdentity {
    type Error = RoleParseError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let record = record.normalized();
        let role = record.role.as_deref().unwrap_or_default().parse::<Role>()?;
        let name = record.display_name();
        Ok(Self {
            id: record.id,
            name,
            role,
        })
    }
}
