//! CLI command implementations for the Hourly client.

pub mod navigate;
pub mod serve;
pub mod session;
pub mod token;

use anyhow::Context as _;
use hourly_auth::{Backend, IdentityResolver, TokenStore, create_store};
use hourly_core::HourlyConfig;
use hourly_guard::NavigationGuard;
use std::sync::Arc;

/// What the session commands share: the configured store and backend.
pub struct Context {
    pub store: Arc<dyn TokenStore>,
    pub backend: Backend,
}

impl Context {
    pub fn new(config: HourlyConfig) -> anyhow::Result<Self> {
        let backend = Backend::from_config(&config).context("Failed to set up backend client")?;
        Ok(Self {
            store: create_store(&config.session),
            backend,
        })
    }

    pub fn resolver(&self) -> IdentityResolver {
        self.backend.resolver()
    }

    pub fn guard(&self) -> NavigationGuard {
        NavigationGuard::standard(Arc::new(self.resolver()))
    }
}
