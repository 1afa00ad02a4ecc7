//! Group identity types.
//!
//! Groups handled by kcgroups are virtual: they exist only as values of a
//! token claim, so every type here is derived from an identifier string and
//! nothing is looked up in a directory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host-wide group identifier, e.g. `keycloak:developers`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupUuid(String);

impl GroupUuid {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self(uuid.into())
    }

    /// Build an identifier from a namespace prefix and a raw claim value.
    pub fn with_prefix(prefix: &str, value: &str) -> Self {
        Self(format!("{prefix}{value}"))
    }

    pub fn get(&self) -> &str {
        &self.0
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Identifier with a leading `prefix` stripped; the whole identifier if
    /// it is not prefixed.
    pub fn local_part(&self, prefix: &str) -> &str {
        self.0.strip_prefix(prefix).unwrap_or(&self.0)
    }
}

impl fmt::Display for GroupUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupUuid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GroupUuid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Basic description of a group, as returned by a backend's `get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDescription {
    pub uuid: GroupUuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl GroupDescription {
    pub fn reference(&self) -> GroupReference {
        GroupReference {
            uuid: self.uuid.clone(),
            name: self.name.clone(),
        }
    }
}

/// A `(uuid, name)` pair, used for suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupReference {
    pub uuid: GroupUuid,
    pub name: String,
}

/// Project a suggestion request is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectScope {
    pub name: String,
}

impl ProjectScope {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_local_part() {
        let uuid = GroupUuid::with_prefix("keycloak:", "developers");
        assert_eq!(uuid.get(), "keycloak:developers");
        assert!(uuid.has_prefix("keycloak:"));
        assert!(!uuid.has_prefix("ldap:"));
        assert_eq!(uuid.local_part("keycloak:"), "developers");
    }

    #[test]
    fn test_local_part_strips_only_leading_prefix() {
        let uuid = GroupUuid::new("keycloak:a-keycloak:b");
        assert_eq!(uuid.local_part("keycloak:"), "a-keycloak:b");
    }

    #[test]
    fn test_local_part_without_prefix() {
        let uuid = GroupUuid::new("ldap:admins");
        assert_eq!(uuid.local_part("keycloak:"), "ldap:admins");
        assert_eq!(uuid.local_part(""), "ldap:admins");
    }

    #[test]
    fn test_description_reference() {
        let description = GroupDescription {
            uuid: GroupUuid::new("keycloak:ops"),
            name: "keycloak/ops".to_string(),
            email_address: None,
            url: None,
        };
        let reference = description.reference();
        assert_eq!(reference.uuid.get(), "keycloak:ops");
        assert_eq!(reference.name, "keycloak/ops");
    }
}
