//! Token store seam.

use crate::token::OAuthToken;
use kcgroups_core::AccountId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Keyed cache of access tokens, owned by the host.
///
/// Implementations synchronize themselves; callers perform at most one `get`
/// and one `invalidate` per resolution and never hold anything across calls.
pub trait TokenStore: Send + Sync {
    /// Get the cached token for an account, if any.
    fn get(&self, account_id: AccountId) -> Option<OAuthToken>;

    /// Drop the cached token for an account.
    fn invalidate(&self, account_id: AccountId);
}

/// In-memory token store.
///
/// Counts invalidations per account so callers can observe them.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    tokens: RwLock<HashMap<AccountId, OAuthToken>>,
    invalidations: RwLock<HashMap<AccountId, usize>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache a token for an account, replacing any previous one.
    pub fn put(&self, account_id: AccountId, token: OAuthToken) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(account_id, token);
    }

    pub fn contains(&self, account_id: AccountId) -> bool {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&account_id)
    }

    pub fn len(&self) -> usize {
        self.tokens.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times `invalidate` was called for an account.
    pub fn invalidation_count(&self, account_id: AccountId) -> usize {
        self.invalidations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&account_id)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of `invalidate` calls.
    pub fn total_invalidations(&self) -> usize {
        self.invalidations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .sum()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self, account_id: AccountId) -> Option<OAuthToken> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&account_id)
            .cloned()
    }

    fn invalidate(&self, account_id: AccountId) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&account_id);
        self.invalidations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(account_id)
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_invalidate() {
        let store = InMemoryTokenStore::new();
        let alice = AccountId::new(1);
        let bob = AccountId::new(2);

        assert!(store.get(alice).is_none());

        store.put(alice, OAuthToken::new("alice-token"));
        store.put(bob, OAuthToken::new("bob-token"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(alice).unwrap().token, "alice-token");

        store.invalidate(alice);
        assert!(!store.contains(alice));
        assert!(store.contains(bob));
        assert_eq!(store.invalidation_count(alice), 1);
        assert_eq!(store.invalidation_count(bob), 0);
    }

    #[test]
    fn test_invalidating_missing_entry_is_recorded() {
        let store = InMemoryTokenStore::new();
        store.invalidate(AccountId::new(9));
        assert!(store.is_empty());
        assert_eq!(store.total_invalidations(), 1);
    }

    #[test]
    fn test_repeated_invalidations_are_counted_per_account() {
        let store = InMemoryTokenStore::new();
        let alice = AccountId::new(1);
        let bob = AccountId::new(2);

        for _ in 0..3 {
            store.invalidate(alice);
        }
        store.invalidate(bob);

        assert_eq!(store.invalidation_count(alice), 3);
        assert_eq!(store.invalidation_count(bob), 1);
        assert_eq!(store.invalidation_count(AccountId::new(3)), 0);
        assert_eq!(store.total_invalidations(), 4);
    }
}
