//! Resolved group membership of a single user.

use kcgroups_core::GroupUuid;
use std::collections::HashSet;

/// Unordered set of groups a user belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMembership {
    groups: HashSet<GroupUuid>,
}

impl GroupMembership {
    /// A membership with no groups.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(groups: impl IntoIterator<Item = GroupUuid>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    pub fn contains(&self, uuid: &GroupUuid) -> bool {
        self.groups.contains(uuid)
    }

    pub fn contains_any_of<'a>(&self, uuids: impl IntoIterator<Item = &'a GroupUuid>) -> bool {
        uuids.into_iter().any(|uuid| self.contains(uuid))
    }

    /// The subset of `uuids` the user belongs to.
    pub fn intersection<'a>(
        &self,
        uuids: impl IntoIterator<Item = &'a GroupUuid>,
    ) -> HashSet<GroupUuid> {
        uuids
            .into_iter()
            .filter(|uuid| self.contains(uuid))
            .cloned()
            .collect()
    }

    /// Every group in the membership.
    pub fn known_groups(&self) -> &HashSet<GroupUuid> {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<GroupUuid> for GroupMembership {
    fn from_iter<T: IntoIterator<Item = GroupUuid>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for GroupMembership {
    type Item = GroupUuid;
    type IntoIter = std::collections::hash_set::IntoIter<GroupUuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uuid(s: &str) -> GroupUuid {
        GroupUuid::new(s)
    }

    #[test]
    fn test_duplicates_collapse() {
        let membership = GroupMembership::new(vec![
            uuid("keycloak:teamA"),
            uuid("keycloak:teamB"),
            uuid("keycloak:teamA"),
        ]);
        assert_eq!(membership.len(), 2);
    }

    #[test]
    fn test_queries() {
        let membership: GroupMembership =
            vec![uuid("keycloak:teamA"), uuid("keycloak:teamB")].into_iter().collect();

        assert!(membership.contains(&uuid("keycloak:teamA")));
        assert!(!membership.contains(&uuid("keycloak:teamC")));

        let candidates = [uuid("keycloak:teamC"), uuid("keycloak:teamB")];
        assert!(membership.contains_any_of(&candidates));
        assert!(!membership.contains_any_of(&[uuid("ldap:teamA")]));

        let common = membership.intersection(&candidates);
        assert_eq!(common.len(), 1);
        assert!(common.contains(&uuid("keycloak:teamB")));
    }

    #[test]
    fn test_empty() {
        let membership = GroupMembership::empty();
        assert!(membership.is_empty());
        assert!(membership.known_groups().is_empty());
        assert!(!membership.contains_any_of(&[uuid("keycloak:teamA")]));
    }
}
