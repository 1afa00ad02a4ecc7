//! Contract between the host and a group backend.

use crate::membership::GroupMembership;
use kcgroups_core::{CurrentUser, GroupDescription, GroupReference, GroupUuid, ProjectScope};
use kcgroups_token::TokenError;

/// A source of groups the host consults when authorizing requests.
///
/// The host calls these synchronously, often on hot paths and from many
/// threads at once, so implementations must be cheap and `Send + Sync`.
pub trait GroupBackend: Send + Sync {
    /// Whether this backend owns the given group identifier.
    ///
    /// Must not have side effects.
    fn handles(&self, uuid: &GroupUuid) -> bool;

    /// Describe a group owned by this backend.
    fn get(&self, uuid: &GroupUuid) -> Option<GroupDescription>;

    /// Groups whose name matches `name`, for autocompletion.
    fn suggest(&self, name: &str, project: Option<&ProjectScope>) -> Vec<GroupReference>;

    /// Groups the user belongs to, according to this backend.
    fn memberships_of(&self, user: &CurrentUser) -> Result<GroupMembership, TokenError>;

    /// Whether the group may be shown to every user.
    fn is_visible_to_all(&self, uuid: &GroupUuid) -> bool;
}
