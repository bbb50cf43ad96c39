//! Structural token decoding.
//!
//! Credentials are JWT-shaped: `header.payload.signature`, each segment
//! base64url encoded. Only the payload is read, and nothing is verified.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{Duration, Utc};
use hourly_core::UserId;
use serde_json::{Map, Value, json};

use crate::claims::TokenClaims;
use crate::credential::Credential;
use crate::error::AuthError;

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// base64url, padding optional.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Standard alphabet, padding optional. Some issuers emit it in tokens.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Encoder for minted segments.
const URL_SAFE_NO_PAD: GeneralPurpose =
    GeneralPurpose::new(&alphabet::URL_SAFE, base64::engine::general_purpose::NO_PAD);

/// Decode a credential's payload segment into claims.
pub fn decode_claims(credential: &Credential) -> Result<TokenClaims, AuthError> {
    let segment = payload_segment(credential.as_str())?;
    let bytes = decode_segment(segment)?;

    let payload: Map<String, Value> = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::InvalidToken(format!("payload is not a JSON object: {e}")))?;

    TokenClaims::from_payload(payload)
}

fn payload_segment(token: &str) -> Result<&str, AuthError> {
    let mut segments = token.split('.');
    let _header = segments.next();
    match segments.next() {
        Some(payload) if !payload.is_empty() => Ok(payload),
        Some(_) => Err(AuthError::InvalidToken("empty payload segment".to_string())),
        None => Err(AuthError::InvalidToken(
            "expected header.payload.signature".to_string(),
        )),
    }
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, AuthError> {
    URL_SAFE_LENIENT
        .decode(segment)
        .or_else(|_| STANDARD_LENIENT.decode(segment))
        .map_err(|e| AuthError::InvalidToken(format!("payload is not base64url: {e}")))
}

/// Mint an unsigned token for `subject`.
///
/// The header declares `alg: none` and the signature segment is empty.
/// Meant for demo mode and tests: anything holding such a token can claim
/// any subject, which is exactly what the resolver accepts.
///
/// Fails when `now + expires_in` is outside the representable date range.
pub fn mint_unsigned(
    subject: &UserId,
    expires_in: Option<Duration>,
) -> Result<Credential, AuthError> {
    let now = Utc::now();
    let mut payload = Map::new();
    payload.insert("uid".to_string(), json!(subject.as_str()));
    payload.insert("iat".to_string(), json!(now.timestamp()));
    if let Some(ttl) = expires_in {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::InvalidToken(format!("expiry out of range: {ttl}")))?;
        payload.insert("exp".to_string(), json!(expires_at.timestamp()));
    }
    Ok(mint_unsigned_payload(&payload))
}

/// Mint an unsigned token carrying an arbitrary payload.
pub fn mint_unsigned_payload(payload: &Map<String, Value>) -> Credential {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(Value::Object(payload.clone()).to_string());
    Credential::new(format!("{header}.{body}."))
}
