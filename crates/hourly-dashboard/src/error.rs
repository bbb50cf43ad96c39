//! Error types for the dashboard crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hourly_auth::AuthError;
use thiserror::Error;

/// Errors that can occur in the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Failed to start the server.
    #[error("failed to start dashboard: {0}")]
    StartupFailed(String),

    /// A page handler ran without a resolved identity.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Backend or session error.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            DashboardError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            DashboardError::Auth(AuthError::LoginRejected(_)) => StatusCode::UNAUTHORIZED,
            DashboardError::Auth(AuthError::Transport(_)) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
