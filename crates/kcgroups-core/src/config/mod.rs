//! Configuration types for kcgroups.
//!
//! Configuration is loaded from a single YAML file (`kcgroups.yaml`):
//!
//! ```yaml
//! auth:
//!   type: oauth
//! groups:
//!   uuid_prefix: "keycloak:"
//!   name_prefix: "keycloak/"
//!   membership_claim: group_membership
//! ```
//!
//! Every section is optional; missing values fall back to the defaults above
//! except `auth.type`, which defaults to `ldap` so that claim-derived groups
//! stay disabled until OAuth is configured explicitly.

pub mod auth;
pub mod groups;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use auth::{AuthConfig, AuthType};
pub use groups::GroupsConfig;

/// Complete kcgroups configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KcGroupsConfig {
    /// Host authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Group namespace and claim settings.
    #[serde(default)]
    pub groups: GroupsConfig,
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KcGroupsConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Load and validate configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.groups.validate().map_err(ConfigError::Config)
    }
}
