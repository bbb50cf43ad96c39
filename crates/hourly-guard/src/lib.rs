//! # hourly-guard
//!
//! Per-navigation authorization for the Hourly front-end.
//!
//! - [`RouteTable`]: the static set of [`RouteDescriptor`]s
//! - [`RoleRouteMap`]: each role's default landing route
//! - [`NavigationGuard`]: decides, for one navigation attempt, whether to
//!   render the route, send the user to their landing route, or send them
//!   back to the login view

pub mod error;
pub mod guard;
pub mod landing;
pub mod route;

pub use error::RouteTableError;
pub use guard::{Decision, DenialReason, NavigationGuard};
pub use landing::RoleRouteMap;
pub use route::{RouteDescriptor, RouteTable, View};
