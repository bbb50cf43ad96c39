//! Login and logout flows.
//!
//! Outside the navigation guard, these are the only writers to a
//! [`TokenStore`].

use hourly_core::UserIdentity;

use crate::error::AuthError;
use crate::lookup::LoginProvider;
use crate::resolver::ResolveIdentity;
use crate::store::TokenStore;

/// Log in and store the issued credential.
///
/// The credential is stored only if it resolves to an identity; a token
/// the backend issues but cannot resolve leaves the store empty.
pub async fn login(
    store: &dyn TokenStore,
    provider: &dyn LoginProvider,
    resolver: &dyn ResolveIdentity,
    login: &str,
    password: &str,
) -> Result<UserIdentity, AuthError> {
    let response = provider.login(login, password).await?;
    let credential = response.access_token;

    let identity = resolver.resolve(&credential).await?;
    store.set(credential)?;

    tracing::info!(user = %identity.id, role = %identity.role, "Logged in");
    Ok(identity)
}

/// Clear the stored credential.
pub fn logout(store: &dyn TokenStore) -> Result<(), AuthError> {
    store.clear()?;
    tracing::info!("Logged out");
    Ok(())
}

/// Resolve the stored credential without touching the store.
pub async fn current_identity(
    store: &dyn TokenStore,
    resolver: &dyn ResolveIdentity,
) -> Result<UserIdentity, AuthError> {
    let credential = store.get()?.ok_or(AuthError::NoCredential)?;
    resolver.resolve(&credential).await
}
