//! Claims carried in a credential's payload segment.

use chrono::{DateTime, Utc};
use hourly_core::UserId;
use serde_json::{Map, Value};

use crate::error::AuthError;

/// Subject claim names, in lookup order.
const SUBJECT_CLAIMS: [&str; 2] = ["uid", "sub"];

/// Decoded (unverified) token claims.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    /// The user the token was issued to.
    pub subject: UserId,

    /// Issued-at, seconds since the epoch.
    pub issued_at: Option<i64>,

    /// Expiry, seconds since the epoch.
    pub expires_at: Option<i64>,

    /// The full payload, including claims not modelled above.
    pub payload: Map<String, Value>,
}

impl TokenClaims {
    /// Extract claims from a decoded payload object.
    ///
    /// The subject is read from `uid`, falling back to `sub`; it may be a
    /// string or an integer.
    pub fn from_payload(payload: Map<String, Value>) -> Result<Self, AuthError> {
        let (name, raw) = SUBJECT_CLAIMS
            .iter()
            .find_map(|name| payload.get(*name).map(|v| (*name, v)))
            .ok_or_else(|| AuthError::InvalidToken("missing subject claim (uid)".to_string()))?;

        let subject: UserId = serde_json::from_value(raw.clone())
            .map_err(|e| AuthError::InvalidToken(format!("invalid {name} claim: {e}")))?;

        Ok(Self {
            subject,
            issued_at: payload.get("iat").and_then(Value::as_i64),
            expires_at: payload.get("exp").and_then(Value::as_i64),
            payload,
        })
    }

    /// Issued-at as a timestamp.
    pub fn issued_at_time(&self) -> Option<DateTime<Utc>> {
        self.issued_at.and_then(|s| DateTime::from_timestamp(s, 0))
    }

    /// Expiry as a timestamp.
    pub fn expires_at_time(&self) -> Option<DateTime<Utc>> {
        self.expires_at.and_then(|s| DateTime::from_timestamp(s, 0))
    }

    /// Whether `exp` lies before `now`. Tokens without `exp` never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_time().is_some_and(|exp| exp <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_uid_claim() {
        let claims =
            TokenClaims::from_payload(payload(json!({"uid": 12, "iat": 1700000000}))).unwrap();
        assert_eq!(claims.subject.as_str(), "12");
        assert_eq!(claims.issued_at, Some(1700000000));
        assert!(claims.issued_at_time().is_some());
        assert!(claims.expires_at.is_none());
    }

    #[test]
    fn test_uid_takes_precedence_over_sub() {
        let claims = TokenClaims::from_payload(payload(json!({"sub": "a", "uid": "b"}))).unwrap();
        assert_eq!(claims.subject.as_str(), "b");
    }

    #[test]
    fn test_sub_fallback() {
        let claims = TokenClaims::from_payload(payload(json!({"sub": "user-7"}))).unwrap();
        assert_eq!(claims.subject.as_str(), "user-7");
    }

    #[test]
    fn test_missing_subject() {
        let err = TokenClaims::from_payload(payload(json!({"iat": 1}))).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_non_scalar_subject() {
        let err = TokenClaims::from_payload(payload(json!({"uid": {"id": 1}}))).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_expiry() {
        let claims = TokenClaims::from_payload(payload(json!({"uid": 1, "exp": 100}))).unwrap();
        let later = DateTime::from_timestamp(200, 0).unwrap();
        let earlier = DateTime::from_timestamp(50, 0).unwrap();
        assert!(claims.is_expired_at(later));
        assert!(!claims.is_expired_at(earlier));
    }
}
