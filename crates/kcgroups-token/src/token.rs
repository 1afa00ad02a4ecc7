//! Cached OAuth access token record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An access token as held by the host's token store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthToken {
    /// The bearer token, possibly encrypted at rest.
    pub token: String,

    /// Token secret, for providers that issue one.
    #[serde(default)]
    pub secret: Option<String>,

    /// Raw token endpoint response.
    #[serde(default)]
    pub raw: Option<String>,

    /// When the token stops being valid. `None` means it never expires.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,

    /// Identifier of the OAuth provider that issued the token.
    #[serde(default)]
    pub provider_id: Option<String>,
}

impl OAuthToken {
    /// Create a token that never expires.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            secret: None,
            raw: None,
            expires_at: None,
            provider_id: None,
        }
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Set the expiry relative to now.
    pub fn expires_in(self, duration: Duration) -> Self {
        self.with_expires_at(Utc::now() + duration)
    }

    pub fn with_provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = Some(provider_id.into());
        self
    }

    /// Replace the bearer string, keeping every other field.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Check if the token has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Check if the token has expired as of `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now > expires_at,
            None => false,
        }
    }
}
