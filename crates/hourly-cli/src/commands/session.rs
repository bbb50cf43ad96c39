//! `hourly login`, `hourly logout` and `hourly whoami`.

use anyhow::Context as _;
use hourly_auth::session;
use hourly_guard::RoleRouteMap;

use super::Context;

/// Log in and store the issued token.
pub async fn login(ctx: &Context, login: &str, password: &str) -> anyhow::Result<()> {
    let identity = session::login(
        ctx.store.as_ref(),
        ctx.backend.login.as_ref(),
        &ctx.resolver(),
        login,
        password,
    )
    .await
    .with_context(|| format!("Login as {login} failed"))?;
    tracing::info!(login, user_id = %identity.id, role = %identity.role, "Logged in");

    println!("✔ Logged in as {} ({})", identity.name, identity.role);
    println!("  Landing route: {}", RoleRouteMap::standard().route_for(identity.role));
    Ok(())
}

/// Clear the stored token.
pub fn logout(ctx: &Context) -> anyhow::Result<()> {
    session::logout(ctx.store.as_ref()).context("Failed to clear stored token")?;
    tracing::info!("Logged out");
    println!("✔ Logged out");
    Ok(())
}

/// Print the identity behind the stored token.
pub async fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let identity = session::current_identity(ctx.store.as_ref(), &ctx.resolver())
        .await
        .context("Not logged in")?;

    println!("User: {}", identity.name);
    println!("  Id: {}", identity.id);
    println!("  Role: {}", identity.role);
    Ok(())
}
