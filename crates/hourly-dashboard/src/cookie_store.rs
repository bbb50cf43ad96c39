//! Per-request token store backed by the browser's cookie jar.

use axum::http::{HeaderMap, HeaderValue, header};
use hourly_auth::{Credential, StoreError, TokenStore};
use std::sync::Mutex;

/// Token store seeded from a request's `Cookie` header.
///
/// Writes are recorded and turned into a `Set-Cookie` header for the
/// response by [`CookieTokenStore::set_cookie`].
#[derive(Debug)]
pub struct CookieTokenStore {
    name: String,
    slot: Mutex<Slot>,
}

#[derive(Debug, Default)]
struct Slot {
    credential: Option<Credential>,
    changed: bool,
}

/// Attributes for the emitted cookie.
#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    /// `None` emits a session cookie.
    pub max_age: Option<u64>,
}

impl CookieTokenStore {
    /// Read the cookie named `name` from `headers`.
    pub fn from_headers(headers: &HeaderMap, name: &str) -> Self {
        let credential = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|cookies| extract_cookie(cookies, name))
            .and_then(|raw| urlencoding::decode(raw).ok().map(|v| v.into_owned()))
            .and_then(|value| Credential::from_stored(&value));

        Self {
            name: name.to_string(),
            slot: Mutex::new(Slot {
                credential,
                changed: false,
            }),
        }
    }

    /// The `Set-Cookie` header reflecting writes made during the request.
    ///
    /// `None` when the store was only read.
    pub fn set_cookie(&self, options: CookieOptions) -> Option<HeaderValue> {
        let slot = self.slot.lock().ok()?;
        if !slot.changed {
            return None;
        }

        let cookie = match &slot.credential {
            Some(credential) => {
                let max_age = options
                    .max_age
                    .map(|secs| format!("; Max-Age={secs}"))
                    .unwrap_or_default();
                format!(
                    "{}={}; Path=/; HttpOnly; SameSite=Lax{}",
                    self.name,
                    urlencoding::encode(credential.as_str()),
                    max_age
                )
            }
            None => format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", self.name),
        };
        HeaderValue::from_str(&cookie).ok()
    }
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Result<Option<Credential>, StoreError> {
        let slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(slot.credential.clone())
    }

    fn set(&self, credential: Credential) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        slot.credential = Some(credential);
        slot.changed = true;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        slot.credential = None;
        slot.changed = true;
        Ok(())
    }
}

/// Extract a cookie value from a `Cookie` header.
fn extract_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}
