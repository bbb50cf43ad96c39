//! Dashboard application state.

use hourly_auth::{Backend, LoginProvider};
use hourly_core::HourlyConfig;
use hourly_guard::NavigationGuard;
use std::sync::Arc;

use crate::error::DashboardError;

/// Shared application state for the dashboard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: HourlyConfig,
    guard: NavigationGuard,
    login: Arc<dyn LoginProvider>,
}

impl AppState {
    /// Create state over an explicit guard and login collaborator.
    pub fn new(
        config: HourlyConfig,
        guard: NavigationGuard,
        login: Arc<dyn LoginProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                guard,
                login,
            }),
        }
    }

    /// Create state with the backend and standard routes the config selects.
    pub fn from_config(config: HourlyConfig) -> Result<Self, DashboardError> {
        let backend = Backend::from_config(&config)?;
        Ok(Self::with_backend(config, &backend))
    }

    pub fn with_backend(config: HourlyConfig, backend: &Backend) -> Self {
        let guard = NavigationGuard::standard(Arc::new(backend.resolver()));
        Self::new(config, guard, backend.login.clone())
    }

    pub fn config(&self) -> &HourlyConfig {
        &self.inner.config
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.inner.guard
    }

    pub fn login_provider(&self) -> &dyn LoginProvider {
        self.inner.login.as_ref()
    }

    /// Name of the cookie carrying the credential.
    pub fn cookie_name(&self) -> &str {
        &self.inner.config.session.key
    }

    pub fn cookie_max_age(&self) -> u64 {
        self.inner.config.dashboard.cookie_max_age_secs
    }
}
