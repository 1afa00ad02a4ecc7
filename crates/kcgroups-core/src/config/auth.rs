//! Host authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication scheme configured on the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    Openid,
    OpenidSso,
    Http,
    HttpLdap,
    ClientSslCertLdap,
    #[default]
    Ldap,
    LdapBind,
    CustomExtension,
    DevelopmentBecomeAnyAccount,
    Oauth,
}

/// Read-only authentication settings, injected into backends at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(rename = "type", default)]
    pub auth_type: AuthType,
}

impl AuthConfig {
    pub fn new(auth_type: AuthType) -> Self {
        Self { auth_type }
    }

    /// Shorthand for an OAuth-enabled configuration.
    pub fn oauth() -> Self {
        Self::new(AuthType::Oauth)
    }

    /// Whether users authenticate through an OAuth provider.
    pub fn is_oauth(&self) -> bool {
        self.auth_type == AuthType::Oauth
    }
}
