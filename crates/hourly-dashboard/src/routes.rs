//! Route definitions for the dashboard.

use axum::{
    Json, Router, middleware,
    routing::{MethodRouter, get, post},
};
use hourly_guard::View;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::state::AppState;
use crate::views;

/// Create the dashboard router.
///
/// One page route per entry of the guard's route table, all behind the
/// guard middleware, plus the unguarded login, logout and health endpoints.
pub fn create_router(state: AppState) -> Router {
    let mut pages = Router::new();
    for route in state.guard().routes().iter() {
        pages = pages.route(&route.path, view_route(route.view));
    }
    let pages = pages.route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::guard_middleware,
    ));

    Router::new()
        .merge(pages)
        .route("/login", post(auth::login_submit))
        .route("/logout", post(auth::logout))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn view_route(view: View) -> MethodRouter<AppState> {
    match view {
        View::Login => get(auth::login_page),
        View::AdminPanel => get(views::admin_panel),
        View::Dashboard => get(views::dashboard),
        View::ManagerDashboard => get(views::manager_dashboard),
        View::ExecutorView => get(views::executor_view),
    }
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "hourly-dashboard" }))
}
