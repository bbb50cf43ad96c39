//! Error types for the auth crate.

use thiserror::Error;

/// Errors produced while resolving or establishing a session.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential is stored.
    #[error("no credential stored")]
    NoCredential,

    /// The credential cannot be structurally decoded.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The credential's subject does not exist upstream, or the lookup failed.
    #[error("user not found: {0}")]
    NotFound(String),

    /// The user's normalized role is not a recognised role.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    /// The backend refused the login.
    #[error("login rejected: {0}")]
    LoginRejected(String),

    /// The backend could not be reached.
    #[error("backend request failed: {0}")]
    Transport(String),

    /// The backend answered with something we cannot use.
    #[error("unexpected backend response: {0}")]
    UnexpectedResponse(String),

    /// The token store failed.
    #[error("token store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from a [`TokenStore`](crate::TokenStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading or writing the backing file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object.
    #[error("corrupt token store: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("token store lock poisoned")]
    Poisoned,
}

/// Errors from a [`UserLookup`](crate::UserLookup) call.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// The request never got an answer.
    #[error("request failed: {0}")]
    Transport(String),

    /// The body is not a user record.
    #[error("malformed user record: {0}")]
    Decode(String),
}
