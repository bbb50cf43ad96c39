//! Offline user directory.
//!
//! Stands in for the backend when `demo.users` is configured: logins are
//! checked against the directory and answered with unsigned tokens, and
//! lookups are served from memory.

use async_trait::async_trait;
use chrono::Duration;
use hourly_core::{DemoConfig, DemoUser, UserId, UserRecord};

use crate::credential::Credential;
use crate::error::{AuthError, LookupError};
use crate::lookup::{LoginProvider, LoginResponse, UserLookup};
use crate::token::mint_unsigned;

/// Lifetime of tokens issued by demo login.
const DEMO_TOKEN_TTL_HOURS: i64 = 24;

/// In-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct DemoDirectory {
    users: Vec<DemoUser>,
}

impl DemoDirectory {
    pub fn new(users: Vec<DemoUser>) -> Self {
        Self { users }
    }

    pub fn from_config(config: &DemoConfig) -> Self {
        Self::new(config.users.clone())
    }

    /// Add a user without a password.
    pub fn with_user(mut self, record: UserRecord) -> Self {
        self.users.push(DemoUser {
            record,
            password: None,
        });
        self
    }

    /// Find a user by login, falling back to name and then id.
    fn find_by_login(&self, login: &str) -> Option<&DemoUser> {
        self.users
            .iter()
            .find(|u| u.record.login.as_deref() == Some(login))
            .or_else(|| self.users.iter().find(|u| u.record.name.as_deref() == Some(login)))
            .or_else(|| self.users.iter().find(|u| u.record.id.as_str() == login))
    }
}

#[async_trait]
impl UserLookup for DemoDirectory {
    async fn user_by_id(
        &self,
        id: &UserId,
        _credential: &Credential,
    ) -> Result<Option<UserRecord>, LookupError> {
        Ok(self
            .users
            .iter()
            .find(|u| &u.record.id == id)
            .map(|u| u.record.clone()))
    }
}

#[async_trait]
impl LoginProvider for DemoDirectory {
    async fn login(&self, login: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let user = self
            .find_by_login(login)
            .filter(|u| u.password.as_deref().is_none_or(|p| p == password))
            .ok_or_else(|| AuthError::LoginRejected("invalid credentials".to_string()))?;

        let ttl = Duration::hours(DEMO_TOKEN_TTL_HOURS);
        Ok(LoginResponse {
            access_token: mint_unsigned(&user.record.id, Some(ttl))?,
        })
    }
}
