//! # kcgroups-backend
//!
//! Group backend that derives a user's groups from a claim in their cached
//! OAuth access token.
//!
//! ## Resolution Pipeline
//!
//! | Step | Outcome on failure |
//! |------|--------------------|
//! | Read token from the store | No grant (empty membership) |
//! | Decrypt, if an encrypter is registered | Error |
//! | Check expiry | Store entry invalidated, no grant |
//! | Decode the payload claims | Error |
//! | Read the membership claim, prefix each value | Error |
//!
//! Groups are virtual: descriptors are synthesized from the identifier and
//! nothing is ever enumerated or suggested.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kcgroups_backend::{GroupBackend, KeycloakGroupBackend};
//! use kcgroups_core::{CurrentUser, KcGroupsConfig};
//! use kcgroups_token::InMemoryTokenStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = KcGroupsConfig::load("kcgroups.yaml")?;
//! let store = Arc::new(InMemoryTokenStore::new());
//! let backend = KeycloakGroupBackend::new(&config, store, None);
//!
//! let membership = backend.memberships_of(&CurrentUser::identified(1000001))?;
//! for group in membership.known_groups() {
//!     println!("{group}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod keycloak;
pub mod membership;
pub mod resolver;

pub use backend::GroupBackend;
pub use keycloak::KeycloakGroupBackend;
pub use membership::GroupMembership;
pub use resolver::MembershipResolver;
