//! `hourly serve` - run the web dashboard.

use anyhow::Context as _;
use hourly_core::HourlyConfig;
use hourly_dashboard::{AppState, DashboardServer};

pub async fn run(mut config: HourlyConfig, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.dashboard.port = port;
    }

    tracing::info!(
        address = %config.dashboard.bind_address(),
        demo = config.demo.is_enabled(),
        "Starting dashboard"
    );
    let state = AppState::from_config(config).context("Failed to initialise dashboard state")?;
    DashboardServer::new(state)
        .run()
        .await
        .context("Dashboard server failed")
}
