// Token verification command

use anyhow::{Context, Result};

use crate::config;

pub fn run(token: &str, secret: Option<String>, json: bool) -> Result<()> {
    let secret = config::resolve_secret_from_env(secret)
        .with_context(|| format!("pass --secret or set {}", config::SECRET_ENV_VAR))?;

    let claims = sigil_core::verify(token, &secret)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&claims)?);
    } else {
        println!("tenant: {}", claims.tenant_id);
        println!("user:   {}", claims.user_id);
        println!("role:   {}", claims.role);
        println!("iat:    {}", claims.iat);
        println!("exp:    {}", claims.exp);
    }

    Ok(())
}
