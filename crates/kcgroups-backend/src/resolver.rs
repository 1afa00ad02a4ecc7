//! Token-to-membership resolution.

use crate::membership::GroupMembership;
use chrono::{DateTime, Utc};
use kcgroups_core::{AccountId, GroupUuid, GroupsConfig};
use kcgroups_token::encrypter::decrypt_with;
use kcgroups_token::{TokenEncrypter, TokenError, TokenStore, decode_claims};
use std::sync::Arc;

/// Resolves an account's groups from the claim set of its cached token.
///
/// Holds no mutable state of its own; the only mutation it performs is
/// invalidating expired entries in the token store.
#[derive(Clone)]
pub struct MembershipResolver {
    store: Arc<dyn TokenStore>,
    encrypter: Option<Arc<dyn TokenEncrypter>>,
    uuid_prefix: String,
    membership_claim: String,
}

impl MembershipResolver {
    /// Create a resolver reading tokens from `store`.
    ///
    /// `encrypter` is the registered token encrypter, if any. Without one,
    /// cached tokens are taken to be plaintext.
    pub fn new(
        store: Arc<dyn TokenStore>,
        encrypter: Option<Arc<dyn TokenEncrypter>>,
        groups: &GroupsConfig,
    ) -> Self {
        Self {
            store,
            encrypter,
            uuid_prefix: groups.uuid_prefix.clone(),
            membership_claim: groups.membership_claim.clone(),
        }
    }

    /// Resolve the groups of an account.
    ///
    /// Returns `Ok(None)` when the account has no usable token: none is
    /// cached, or the cached one has expired (in which case it is also
    /// invalidated). A token that is present and unexpired but cannot be
    /// decoded is an error.
    pub fn resolve(&self, account_id: AccountId) -> Result<Option<GroupMembership>, TokenError> {
        self.resolve_at(account_id, Utc::now())
    }

    /// Resolve the groups of an account, judging expiry as of `now`.
    pub fn resolve_at(
        &self,
        account_id: AccountId,
        now: DateTime<Utc>,
    ) -> Result<Option<GroupMembership>, TokenError> {
        let Some(token) = self.store.get(account_id) else {
            tracing::debug!(%account_id, "no cached access token");
            return Ok(None);
        };

        let token = decrypt_with(self.encrypter.as_deref(), token)?;

        if token.is_expired_at(now) {
            tracing::info!(
                %account_id,
                expires_at = ?token.expires_at,
                "cached access token expired, invalidating"
            );
            self.store.invalidate(account_id);
            return Ok(None);
        }

        let groups = decode_claims(&token.token)
            .and_then(|claims| {
                claims
                    .string_array(&self.membership_claim)
                    .map_err(TokenError::from)
            })
            .inspect_err(|e| {
                tracing::warn!(%account_id, error = %e, "failed to read group claims from access token");
            })?;

        let membership: GroupMembership = groups
            .iter()
            .map(|group| GroupUuid::with_prefix(&self.uuid_prefix, group))
            .collect();

        tracing::debug!(%account_id, groups = membership.len(), "resolved group membership");
        Ok(Some(membership))
    }

    pub fn uuid_prefix(&self) -> &str {
        &self.uuid_prefix
    }
}

impl std::fmt::Debug for MembershipResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipResolver")
            .field("encrypter", &self.encrypter.is_some())
            .field("uuid_prefix", &self.uuid_prefix)
            .field("membership_claim", &self.membership_claim)
            .finish_non_exhaustive()
    }
}
