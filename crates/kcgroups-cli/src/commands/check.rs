//! `kcgroups check` - Validate a configuration file.

use anyhow::Context;
use kcgroups_core::KcGroupsConfig;
use std::path::Path;

pub fn run(config_path: &Path) -> anyhow::Result<()> {
    let config = KcGroupsConfig::load(config_path)
        .with_context(|| format!("Invalid configuration: {}", config_path.display()))?;

    println!("✔ Configuration is valid: {}", config_path.display());
    println!("  Auth type:        {:?}", config.auth.auth_type);
    println!("  UUID prefix:      {}", config.groups.uuid_prefix);
    println!("  Name prefix:      {}", config.groups.name_prefix);
    println!("  Membership claim: {}", config.groups.membership_claim);
    if !config.auth.is_oauth() {
        println!("  Note: claim-derived groups are disabled unless auth.type is oauth");
    }

    Ok(())
}
