//! # hourly-dashboard
//!
//! Embedded web UI for the Hourly time-tracking front-end.
//!
//! Every page is a route from the guard's [`RouteTable`]; every page
//! request goes through [`NavigationGuard::check`] before it renders.
//! The credential travels in the `authToken` cookie (the name follows
//! `session.key`), read and written through a per-request
//! [`CookieTokenStore`].
//!
//! Pages:
//! - `/` login
//! - `/admin` users and competencies
//! - `/manager` projects, tasks and reports
//! - `/executor` time entries and tasks
//! - `/dashboard` overview for any signed-in user
//!
//! [`RouteTable`]: hourly_guard::RouteTable
//! [`NavigationGuard::check`]: hourly_guard::NavigationGuard::check

pub mod auth;
pub mod cookie_store;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;
pub mod views;

pub use cookie_store::CookieTokenStore;
pub use error::DashboardError;
pub use server::DashboardServer;
pub use state::AppState;
