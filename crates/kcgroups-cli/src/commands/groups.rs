//! Group commands.
//!
//! `kcgroups groups resolve` - Run a token through the membership pipeline.
//! `kcgroups groups describe` - Show how the backend treats a group identifier.

use super::{parse_duration, read_token_arg};
use anyhow::Context;
use chrono::Utc;
use kcgroups_backend::{GroupBackend, KeycloakGroupBackend};
use kcgroups_core::{AccountId, CurrentUser, GroupUuid, KcGroupsConfig};
use kcgroups_token::{InMemoryTokenStore, OAuthToken};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Account the token is cached under for a local resolution.
const LOCAL_ACCOUNT: i32 = 1;

#[derive(Debug, Serialize)]
struct ResolveReport {
    groups: Vec<String>,
    handled: bool,
    invalidated: bool,
}

fn load_config(path: &Path) -> anyhow::Result<KcGroupsConfig> {
    KcGroupsConfig::load(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

/// Resolve the groups a token grants under the given configuration.
pub fn resolve(
    config_path: &Path,
    token: String,
    expires_in: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let token = read_token_arg(token)?;

    let mut cached = OAuthToken::new(token);
    if let Some(expires_in) = expires_in {
        cached = cached.with_expires_at(Utc::now() + parse_duration(&expires_in)?);
    }

    let report = resolve_report(&config, cached)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.invalidated {
        println!("Token has expired; it was invalidated and grants no groups.");
        return Ok(());
    }
    if report.groups.is_empty() {
        println!("Token grants no groups.");
        return Ok(());
    }
    for group in &report.groups {
        println!("{}", group);
    }
    if !report.handled {
        eprintln!("warning: auth.type is not oauth, so the host will not route these groups here");
    }

    Ok(())
}

fn resolve_report(config: &KcGroupsConfig, token: OAuthToken) -> anyhow::Result<ResolveReport> {
    let account_id = AccountId::new(LOCAL_ACCOUNT);
    let store = Arc::new(InMemoryTokenStore::new());
    store.put(account_id, token);

    let backend = KeycloakGroupBackend::new(config, store.clone(), None);
    let membership = backend
        .memberships_of(&CurrentUser::Identified(account_id))
        .context("Failed to resolve group membership")?;

    let mut groups: Vec<String> = membership
        .known_groups()
        .iter()
        .map(|uuid| uuid.to_string())
        .collect();
    groups.sort();

    tracing::debug!(groups = groups.len(), "resolved local token");

    Ok(ResolveReport {
        handled: membership.known_groups().iter().all(|uuid| backend.handles(uuid)),
        invalidated: store.invalidation_count(account_id) > 0,
        groups,
    })
}

/// Print how the backend answers each query for a group identifier.
pub fn describe(config_path: &Path, uuid: String) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let backend = KeycloakGroupBackend::new(&config, Arc::new(InMemoryTokenStore::new()), None);
    let uuid = GroupUuid::new(uuid);

    println!("UUID:    {}", uuid);
    println!("Handled: {}", backend.handles(&uuid));
    if let Some(description) = backend.get(&uuid) {
        println!("Name:    {}", description.name);
    }
    println!("Visible: {}", backend.is_visible_to_all(&uuid));

    Ok(())
}
