//! Backend selection.

use hourly_core::HourlyConfig;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::demo::DemoDirectory;
use crate::error::AuthError;
use crate::lookup::{LoginProvider, UserLookup};
use crate::resolver::IdentityResolver;

/// The pair of collaborators a session needs: user lookup and login.
#[derive(Clone)]
pub struct Backend {
    pub users: Arc<dyn UserLookup>,
    pub login: Arc<dyn LoginProvider>,
    demo: bool,
}

impl Backend {
    /// Use the demo directory when it has users, the REST API otherwise.
    pub fn from_config(config: &HourlyConfig) -> Result<Self, AuthError> {
        if config.demo.is_enabled() {
            tracing::info!(users = config.demo.users.len(), "Using demo user directory");
            return Ok(Self::demo(DemoDirectory::from_config(&config.demo)));
        }

        let client = Arc::new(ApiClient::new(&config.api)?);
        tracing::debug!(base_url = %client.base_url(), "Using REST backend");
        Ok(Self {
            users: client.clone(),
            login: client,
            demo: false,
        })
    }

    pub fn demo(directory: DemoDirectory) -> Self {
        let directory = Arc::new(directory);
        Self {
            users: directory.clone(),
            login: directory,
            demo: true,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.demo
    }

    pub fn resolver(&self) -> IdentityResolver {
        IdentityResolver::new(self.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_api_by_default() {
        let backend = Backend::from_config(&HourlyConfig::default()).unwrap();
        assert!(!backend.is_demo());
    }

    #[test]
    fn test_selects_demo_when_users_configured() {
        let config = HourlyConfig::from_yaml(
            r#"
demo:
  users:
    - { id: 1, name: Admin, role: admin }
"#,
        )
        .unwrap();
        assert!(Backend::from_config(&config).unwrap().is_demo());
    }
}
