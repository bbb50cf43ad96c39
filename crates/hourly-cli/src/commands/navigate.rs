//! `hourly navigate` and `hourly routes`.

use anyhow::{Context as _, bail};
use hourly_core::Role;
use hourly_guard::{Decision, RoleRouteMap, RouteTable};

use super::Context;

/// Run the guard for `path` against the stored token.
///
/// Has the same side effects as a browser navigation: a token that fails
/// to resolve is cleared.
pub async fn navigate(ctx: &Context, path: &str, json: bool) -> anyhow::Result<()> {
    let guard = ctx.guard();
    let Some(decision) = guard.navigate(ctx.store.as_ref(), path).await else {
        bail!("No route for {path}. Run `hourly routes` to list them.");
    };
    tracing::info!(path, allowed = decision.is_allowed(), "Navigation decided");

    if json {
        let out =
            serde_json::to_string_pretty(&decision).context("Failed to serialize decision")?;
        println!("{out}");
        return Ok(());
    }

    match decision {
        Decision::Allowed { identity: None } => println!("✔ {path}: allowed (public)"),
        Decision::Allowed {
            identity: Some(identity),
        } => println!("✔ {path}: allowed for {} ({})", identity.name, identity.role),
        Decision::RedirectLogin { to, reason } => {
            println!("✖ {path}: redirect to {to} (login required: {reason})")
        }
        Decision::RedirectRoleDefault { to, identity } => {
            println!("→ {path}: redirect to {to} ({} is {})", identity.name, identity.role)
        }
    }
    Ok(())
}

/// Print the route table and landing map.
pub fn routes() {
    let table = RouteTable::standard();
    let landing = RoleRouteMap::standard();

    println!("Routes:");
    for route in table.iter() {
        let access = match (route.requires_auth, route.required_role) {
            (false, _) => "public".to_string(),
            (true, None) => "any signed-in user".to_string(),
            (true, Some(role)) => format!("{role} only"),
        };
        println!("  {:<12} {:<18} {}", route.path, route.name, access);
    }

    println!();
    println!("Landing routes:");
    for role in Role::ALL {
        println!("  {:<12} {}", role.as_str(), landing.route_for(role));
    }
}
