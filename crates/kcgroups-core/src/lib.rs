//! # kcgroups-core
//!
//! Types shared across the kcgroups crates:
//! - Group identifiers, descriptors and references as seen by the host
//! - Account and current-user context
//! - Configuration (auth type, namespace prefixes, membership claim)

pub mod account;
pub mod config;
pub mod group;

pub use account::{AccountId, CurrentUser};
pub use config::{AuthConfig, AuthType, ConfigError, GroupsConfig, KcGroupsConfig};
pub use group::{GroupDescription, GroupReference, GroupUuid, ProjectScope};
