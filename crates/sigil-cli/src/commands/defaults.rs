// Well-known identifier listing command

use anyhow::Result;

pub fn run() -> Result<()> {
    println!("tenant: {}", sigil_core::DEFAULT_TENANT_ID);
    println!("user:   {}", sigil_core::DEFAULT_USER_ID);
    Ok(())
}
