// Token issuance command

use anyhow::{Context, Result};
use sigil_core::Role;

use crate::config;

pub fn run(
    tenant: &str,
    user: &str,
    role: Role,
    ttl: i64,
    secret: Option<String>,
    verbose: bool,
) -> Result<()> {
    let secret = config::resolve_secret_from_env(secret)
        .with_context(|| format!("pass --secret or set {}", config::SECRET_ENV_VAR))?;

    let now = chrono::Utc::now().timestamp();
    let token = sigil_core::issue_at(tenant, user, role, &secret, ttl, now)?;

    if verbose {
        eprintln!("tenant: {tenant}");
        eprintln!("user:   {user}");
        eprintln!("role:   {role}");
        eprintln!("iat:    {now}");
        eprintln!("exp:    {}", now + ttl);
    }

    // The token itself is the only thing on stdout
    println!("{token}");
    Ok(())
}
