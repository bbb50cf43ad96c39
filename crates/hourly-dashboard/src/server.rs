//! Dashboard server implementation.

use tokio::net::TcpListener;

use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;

/// The dashboard server.
pub struct DashboardServer {
    state: AppState,
}

impl DashboardServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Start the dashboard server.
    pub async fn run(self) -> Result<(), DashboardError> {
        let addr = self.bind_address();
        let app = routes::create_router(self.state);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(format!("failed to bind {addr}: {e}")))?;
        tracing::info!(address = %addr, "Hourly dashboard listening");

        axum::serve(listener, app)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        self.state.config().dashboard.bind_address()
    }
}
