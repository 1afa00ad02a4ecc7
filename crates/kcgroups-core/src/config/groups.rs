//! Group namespace configuration.

use serde::{Deserialize, Serialize};

/// Where claim-derived groups live in the host's identifier space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupsConfig {
    /// Prefix marking group identifiers owned by this backend.
    #[serde(default = "default_uuid_prefix")]
    pub uuid_prefix: String,

    /// Prefix of the display name synthesized for each group.
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// Token claim holding the array of group names.
    #[serde(default = "default_membership_claim")]
    pub membership_claim: String,
}

impl Default for GroupsConfig {
    fn default() -> Self {
        Self {
            uuid_prefix: default_uuid_prefix(),
            name_prefix: default_name_prefix(),
            membership_claim: default_membership_claim(),
        }
    }
}

impl GroupsConfig {
    pub fn validate(&self) -> Result<(), String> {
        // An empty prefix would claim every identifier in the host.
        if self.uuid_prefix.is_empty() {
            return Err("groups.uuid_prefix cannot be empty".to_string());
        }
        if self.name_prefix.is_empty() {
            return Err("groups.name_prefix cannot be empty".to_string());
        }
        if self.membership_claim.trim().is_empty() {
            return Err("groups.membership_claim cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_uuid_prefix() -> String {
    "keycloak:".to_string()
}

fn default_name_prefix() -> String {
    "keycloak/".to_string()
}

fn default_membership_claim() -> String {
    "group_membership".to_string()
}
