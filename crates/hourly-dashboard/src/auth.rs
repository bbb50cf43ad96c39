//! Route guarding and the login/logout handlers.
//!
//! Every page request runs [`NavigationGuard::check`] against a
//! [`CookieTokenStore`] built from the request. Allowed requests carry the
//! resolved [`UserIdentity`] in their extensions; everything else becomes a
//! `303 See Other`. Writes the guard or a handler makes to the store are
//! sent back as `Set-Cookie`.
//!
//! [`NavigationGuard::check`]: hourly_guard::NavigationGuard::check

use axum::{
    Form,
    extract::{FromRequestParts, Query, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
};
use hourly_auth::session;
use hourly_core::{StorageKind, UserIdentity};
use hourly_guard::Decision;
use serde::Deserialize;

use crate::cookie_store::{CookieOptions, CookieTokenStore};
use crate::error::DashboardError;
use crate::state::AppState;
use crate::templates;

/// Guard middleware for page routes.
pub async fn guard_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let guard = state.guard();
    let Some(route) = guard.routes().find(request.uri().path()) else {
        return next.run(request).await;
    };

    let store = CookieTokenStore::from_headers(request.headers(), state.cookie_name());
    let decision = guard.check(&store, route).await;

    let response = match decision {
        Decision::Allowed { identity } => {
            if let Some(identity) = identity {
                request.extensions_mut().insert(identity);
            }
            next.run(request).await
        }
        Decision::RedirectLogin { to, reason } => {
            tracing::debug!(reason = %reason, to = %to, "Redirecting to login");
            Redirect::to(&to).into_response()
        }
        Decision::RedirectRoleDefault { to, .. } => Redirect::to(&to).into_response(),
    };

    with_cookie(response, &store, &state)
}

/// Login page query parameters.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub error: Option<String>,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub login: String,
    #[serde(default)]
    pub password: String,
}

/// Handler for the login page (GET).
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    Html(templates::login_page(query.error.as_deref()))
}

/// Handler for login form submission (POST).
pub async fn login_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response {
    let store = CookieTokenStore::from_headers(&headers, state.cookie_name());
    let guard = state.guard();

    let result = session::login(
        &store,
        state.login_provider(),
        guard.resolver().as_ref(),
        &form.login,
        &form.password,
    )
    .await;

    let response = match result {
        Ok(identity) => Redirect::to(guard.landing().route_for(identity.role)).into_response(),
        Err(e) => {
            tracing::warn!(login = %form.login, error = %e, "Login failed");
            let login_path = &guard.routes().login().path;
            Redirect::to(&format!("{login_path}?error=invalid")).into_response()
        }
    };

    with_cookie(response, &store, &state)
}

/// Handler for logout (POST).
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let store = CookieTokenStore::from_headers(&headers, state.cookie_name());
    if let Err(e) = session::logout(&store) {
        tracing::warn!(error = %e, "Logout failed");
    }

    let response = Redirect::to(&state.guard().routes().login().path).into_response();
    with_cookie(response, &store, &state)
}

fn with_cookie(mut response: Response, store: &CookieTokenStore, state: &AppState) -> Response {
    let max_age = match state.config().session.storage {
        StorageKind::Durable => Some(state.cookie_max_age()),
        StorageKind::Session => None,
    };
    if let Some(cookie) = store.set_cookie(CookieOptions { max_age }) {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

/// The identity the guard resolved for this request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserIdentity);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = DashboardError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(CurrentUser)
            .ok_or(DashboardError::NotAuthenticated)
    }
}
