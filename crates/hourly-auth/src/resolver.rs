//! Identity resolution: credential → claims → user record → identity.

use async_trait::async_trait;
use hourly_core::UserIdentity;
use std::sync::Arc;

use crate::credential::Credential;
use crate::error::AuthError;
use crate::lookup::UserLookup;
use crate::token::decode_claims;

/// Turns a credential into a user identity.
#[async_trait]
pub trait ResolveIdentity: Send + Sync {
    async fn resolve(&self, credential: &Credential) -> Result<UserIdentity, AuthError>;
}

/// Resolver backed by a [`UserLookup`].
#[derive(Clone)]
pub struct IdentityResolver {
    lookup: Arc<dyn UserLookup>,
}

impl IdentityResolver {
    pub fn new(lookup: Arc<dyn UserLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl ResolveIdentity for IdentityResolver {
    async fn resolve(&self, credential: &Credential) -> Result<UserIdentity, AuthError> {
        let claims = decode_claims(credential)?;
        let subject = claims.subject;

        let record = match self.lookup.user_by_id(&subject, credential).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                return Err(AuthError::NotFound(format!("user {subject}: empty response")));
            }
            Err(e) => return Err(AuthError::NotFound(format!("user {subject}: {e}"))),
        };

        let identity = UserIdentity::try_from(record).map_err(|e| AuthError::UnknownRole(e.0))?;
        tracing::debug!(user = %identity.id, role = %identity.role, "Resolved identity");
        Ok(identity)
    }
}
