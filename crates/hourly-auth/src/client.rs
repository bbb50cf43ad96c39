//! REST client for the time-tracking backend.

use async_trait::async_trait;
use hourly_core::{ApiConfig, UserId, UserRecord};
use reqwest::header::ACCEPT;

use crate::credential::Credential;
use crate::error::{AuthError, LookupError};
use crate::lookup::{LoginProvider, LoginResponse, UserLookup};

/// HTTP client for the backend's `users` and `login` endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_url(&self, id: &UserId) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    fn login_url(&self, login: &str) -> String {
        format!("{}/login/{}", self.base_url, urlencoding::encode(login))
    }
}

#[async_trait]
impl UserLookup for ApiClient {
    async fn user_by_id(
        &self,
        id: &UserId,
        credential: &Credential,
    ) -> Result<Option<UserRecord>, LookupError> {
        let url = self.user_url(id);
        tracing::debug!(url = %url, "Fetching user");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .bearer_auth(credential.as_str())
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<Option<UserRecord>>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}

#[async_trait]
impl LoginProvider for ApiClient {
    async fn login(&self, login: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let response = self
            .http
            .post(self.login_url(login))
            .query(&[("password", password)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::LoginRejected(format!(
                "backend returned HTTP {}",
                status.as_u16()
            )));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))?;

        if body.access_token.as_str().trim().is_empty() {
            return Err(AuthError::UnexpectedResponse("empty access_token".to_string()));
        }
        Ok(body)
    }
}
