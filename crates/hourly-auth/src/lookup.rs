//! Backend collaborator interfaces.

use async_trait::async_trait;
use hourly_core::{UserId, UserRecord};
use serde::{Deserialize, Serialize};

use crate::credential::Credential;
use crate::error::{AuthError, LookupError};

/// "Get user by id".
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Fetch a user record, authenticating with `credential`.
    ///
    /// `Ok(None)` means the backend answered successfully with an empty body.
    async fn user_by_id(
        &self,
        id: &UserId,
        credential: &Credential,
    ) -> Result<Option<UserRecord>, LookupError>;
}

/// Exchanges login and password for a credential.
#[async_trait]
pub trait LoginProvider: Send + Sync {
    async fn login(&self, login: &str, password: &str) -> Result<LoginResponse, AuthError>;
}

/// Body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: Credential,
}
