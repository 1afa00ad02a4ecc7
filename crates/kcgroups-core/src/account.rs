//! Account identity as handed to group backends by the host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric account identifier, the key of the token store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i32);

impl AccountId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i32> for AccountId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// The user on whose behalf the host is asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentUser {
    /// An authenticated user with an account.
    Identified(AccountId),
    /// A request without an authenticated account.
    Anonymous,
}

impl CurrentUser {
    pub fn identified(id: impl Into<AccountId>) -> Self {
        Self::Identified(id.into())
    }

    /// Account id, if the user is identified.
    pub fn account_id(&self) -> Option<AccountId> {
        match self {
            Self::Identified(id) => Some(*id),
            Self::Anonymous => None,
        }
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, Self::Identified(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_account_id() {
        let id: AccountId = " 1000042 ".parse().unwrap();
        assert_eq!(id.get(), 1000042);
        assert_eq!(id.to_string(), "1000042");
        assert!("abc".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_anonymous_has_no_account() {
        assert_eq!(CurrentUser::Anonymous.account_id(), None);
        assert!(!CurrentUser::Anonymous.is_identified());

        let user = CurrentUser::identified(7);
        assert_eq!(user.account_id(), Some(AccountId::new(7)));
    }
}
