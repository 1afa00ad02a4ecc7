//! Group backend for groups asserted by a Keycloak `group_membership` claim.

use crate::backend::GroupBackend;
use crate::membership::GroupMembership;
use crate::resolver::MembershipResolver;
use kcgroups_core::{
    AuthConfig, CurrentUser, GroupDescription, GroupReference, GroupUuid, KcGroupsConfig,
    ProjectScope,
};
use kcgroups_token::{TokenEncrypter, TokenError, TokenStore};
use std::sync::Arc;

/// Backend exposing token-claim groups under the `keycloak:` namespace.
///
/// Groups are virtual. They are never enumerated, `get` synthesizes a
/// description from the identifier alone, and all of them are visible to
/// everyone.
#[derive(Debug, Clone)]
pub struct KeycloakGroupBackend {
    auth: AuthConfig,
    name_prefix: String,
    resolver: MembershipResolver,
}

impl KeycloakGroupBackend {
    /// Create a backend from configuration, the host's token store and the
    /// registered token encrypter, if any.
    pub fn new(
        config: &KcGroupsConfig,
        store: Arc<dyn TokenStore>,
        encrypter: Option<Arc<dyn TokenEncrypter>>,
    ) -> Self {
        Self {
            auth: config.auth.clone(),
            name_prefix: config.groups.name_prefix.clone(),
            resolver: MembershipResolver::new(store, encrypter, &config.groups),
        }
    }

    /// Description of a group, derived purely from its identifier.
    pub fn describe(&self, uuid: &GroupUuid) -> GroupDescription {
        GroupDescription {
            uuid: uuid.clone(),
            name: format!(
                "{}{}",
                self.name_prefix,
                uuid.local_part(self.resolver.uuid_prefix())
            ),
            email_address: None,
            url: None,
        }
    }
}

impl GroupBackend for KeycloakGroupBackend {
    fn handles(&self, uuid: &GroupUuid) -> bool {
        self.auth.is_oauth() && uuid.has_prefix(self.resolver.uuid_prefix())
    }

    fn get(&self, uuid: &GroupUuid) -> Option<GroupDescription> {
        Some(self.describe(uuid))
    }

    fn suggest(&self, _name: &str, _project: Option<&ProjectScope>) -> Vec<GroupReference> {
        Vec::new()
    }

    // Users without a usable token get an empty membership rather than a
    // distinct "absent" result.
    fn memberships_of(&self, user: &CurrentUser) -> Result<GroupMembership, TokenError> {
        let Some(account_id) = user.account_id() else {
            return Ok(GroupMembership::empty());
        };

        Ok(self
            .resolver
            .resolve(account_id)?
            .unwrap_or_else(GroupMembership::empty))
    }

    fn is_visible_to_all(&self, _uuid: &GroupUuid) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kcgroups_core::AuthType;
    use kcgroups_token::InMemoryTokenStore;

    fn backend(auth_type: AuthType) -> KeycloakGroupBackend {
        let config = KcGroupsConfig {
            auth: AuthConfig::new(auth_type),
            ..Default::default()
        };
        KeycloakGroupBackend::new(&config, Arc::new(InMemoryTokenStore::new()), None)
    }

    #[test]
    fn test_handles_requires_prefix_and_oauth() {
        let oauth = backend(AuthType::Oauth);
        let ldap = backend(AuthType::Ldap);
        let group = GroupUuid::new("keycloak:teamA");
        let foreign = GroupUuid::new("ldap:teamA");

        assert!(oauth.handles(&group));
        assert!(!oauth.handles(&foreign));
        assert!(!ldap.handles(&group));
        assert!(!ldap.handles(&foreign));
    }

    #[test]
    fn test_get_synthesizes_description() {
        let description = backend(AuthType::Oauth)
            .get(&GroupUuid::new("keycloak:developers"))
            .unwrap();

        assert_eq!(description.uuid.get(), "keycloak:developers");
        assert_eq!(description.name, "keycloak/developers");
        assert!(description.email_address.is_none());
        assert!(description.url.is_none());
    }

    #[test]
    fn test_get_does_not_depend_on_auth_type() {
        let description = backend(AuthType::Ldap)
            .get(&GroupUuid::new("keycloak:ops"))
            .unwrap();
        assert_eq!(description.name, "keycloak/ops");
    }

    #[test]
    fn test_suggest_is_empty() {
        let backend = backend(AuthType::Oauth);
        assert!(backend.suggest("team", None).is_empty());
        assert!(
            backend
                .suggest("keycloak:teamA", Some(&ProjectScope::new("All-Projects")))
                .is_empty()
        );
    }

    #[test]
    fn test_anonymous_user_has_no_groups() {
        let membership = backend(AuthType::Oauth)
            .memberships_of(&CurrentUser::Anonymous)
            .unwrap();
        assert!(membership.is_empty());
    }

    #[test]
    fn test_everything_is_visible() {
        let backend = backend(AuthType::Oauth);
        assert!(backend.is_visible_to_all(&GroupUuid::new("keycloak:teamA")));
        assert!(backend.is_visible_to_all(&GroupUuid::new("")));
    }
}
