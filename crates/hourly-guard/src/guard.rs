//! The navigation guard.
//!
//! One call to [`NavigationGuard::check`] evaluates one navigation attempt:
//!
//! 1. Public routes are allowed without touching the store or the resolver.
//! 2. No stored credential redirects to login.
//! 3. A credential that fails to resolve is cleared, then redirects to login.
//! 4. A resolved identity with the wrong role is sent to its landing route;
//!    the credential is kept.
//! 5. Otherwise the navigation is allowed.

use hourly_auth::{AuthError, ResolveIdentity, TokenStore};
use hourly_core::UserIdentity;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::error::RouteTableError;
use crate::landing::RoleRouteMap;
use crate::route::{RouteDescriptor, RouteTable};

/// Why a navigation was sent back to the login view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    NoCredential,
    InvalidToken,
    IdentityNotFound,
    UnknownRole,
    StoreUnavailable,
}

impl DenialReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::NoCredential => "no_credential",
            DenialReason::InvalidToken => "invalid_token",
            DenialReason::IdentityNotFound => "identity_not_found",
            DenialReason::UnknownRole => "unknown_role",
            DenialReason::StoreUnavailable => "store_unavailable",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&AuthError> for DenialReason {
    fn from(err: &AuthError) -> Self {
        match err {
            AuthError::NoCredential => DenialReason::NoCredential,
            AuthError::NotFound(_) => DenialReason::IdentityNotFound,
            AuthError::UnknownRole(_) => DenialReason::UnknownRole,
            AuthError::Store(_) => DenialReason::StoreUnavailable,
            AuthError::InvalidToken(_)
            | AuthError::LoginRejected(_)
            | AuthError::Transport(_)
            | AuthError::UnexpectedResponse(_) => DenialReason::InvalidToken,
        }
    }
}

/// Outcome of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Render the route. `identity` is `None` for public routes.
    Allowed { identity: Option<UserIdentity> },

    /// Go to the login view.
    RedirectLogin { to: String, reason: DenialReason },

    /// Wrong role for the route; go to the identity's landing route.
    RedirectRoleDefault { to: String, identity: UserIdentity },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed { .. })
    }

    /// Where to send the user, if anywhere.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Decision::Allowed { .. } => None,
            Decision::RedirectLogin { to, .. } | Decision::RedirectRoleDefault { to, .. } => {
                Some(to)
            }
        }
    }
}

/// Route guard shared by every navigation.
///
/// Holds no per-navigation state; the token store is passed to each call.
#[derive(Clone)]
pub struct NavigationGuard {
    routes: RouteTable,
    landing: RoleRouteMap,
    resolver: Arc<dyn ResolveIdentity>,
}

impl NavigationGuard {
    /// Fails when a landing route is missing from `routes` or closed to its role.
    pub fn new(
        routes: RouteTable,
        landing: RoleRouteMap,
        resolver: Arc<dyn ResolveIdentity>,
    ) -> Result<Self, RouteTableError> {
        landing.validate(&routes)?;
        Ok(Self {
            routes,
            landing,
            resolver,
        })
    }

    /// Guard over the standard route table and landing map.
    pub fn standard(resolver: Arc<dyn ResolveIdentity>) -> Self {
        Self {
            routes: RouteTable::standard(),
            landing: RoleRouteMap::standard(),
            resolver,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn landing(&self) -> &RoleRouteMap {
        &self.landing
    }

    pub fn resolver(&self) -> &Arc<dyn ResolveIdentity> {
        &self.resolver
    }

    /// Evaluate navigation to `path`. Unknown paths yield `None`.
    pub async fn navigate(&self, store: &dyn TokenStore, path: &str) -> Option<Decision> {
        let route = self.routes.find(path)?;
        Some(self.check(store, route).await)
    }

    /// Evaluate navigation to `route`.
    pub async fn check(&self, store: &dyn TokenStore, route: &RouteDescriptor) -> Decision {
        if !route.requires_auth {
            return Decision::Allowed { identity: None };
        }

        let credential = match store.get() {
            Ok(Some(credential)) => credential,
            Ok(None) => {
                tracing::debug!(route = %route.path, "No credential, redirecting to login");
                return self.to_login(DenialReason::NoCredential);
            }
            Err(e) => {
                tracing::warn!(route = %route.path, error = %e, "Token store unavailable");
                return self.to_login(DenialReason::StoreUnavailable);
            }
        };

        let identity = match self.resolver.resolve(&credential).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(route = %route.path, error = %e, "Identity resolution failed");
                if let Err(clear_err) = store.clear() {
                    tracing::warn!(error = %clear_err, "Failed to clear credential");
                }
                return self.to_login(DenialReason::from(&e));
            }
        };

        if let Some(required) = route.required_role {
            if identity.role != required {
                let to = self.landing.route_for(identity.role).to_string();
                tracing::debug!(
                    route = %route.path,
                    user = %identity.id,
                    role = %identity.role,
                    required = %required,
                    to = %to,
                    "Role mismatch, redirecting to landing route"
                );
                return Decision::RedirectRoleDefault { to, identity };
            }
        }

        tracing::debug!(
            route = %route.path,
            user = %identity.id,
            role = %identity.role,
            "Navigation allowed"
        );
        Decision::Allowed {
            identity: Some(identity),
        }
    }

    fn to_login(&self, reason: DenialReason) -> Decision {
        Decision::RedirectLogin {
            to: self.routes.login().path.clone(),
            reason,
        }
    }
}
