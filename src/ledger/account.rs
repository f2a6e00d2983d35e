use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A financial account that transactions belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    pub balance_cents: i64,
    #[serde(default)]
    pub is_default: bool,
}

impl Account {
    /// Creates a new account with a zero balance.
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            balance_cents: 0,
            is_default: false,
        }
    }
}

/// Supported account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountKind {
    Current,
    Savings,
}

/// Resolves the account a dashboard should open on.
///
/// The upstream data does not enforce the one-default invariant, so this
/// tolerates zero or several flagged accounts: first flagged default
/// wins, else the first account, else `None` for an empty set.
pub fn default_account(accounts: &[Account]) -> Option<&Account> {
    accounts
        .iter()
        .find(|account| account.is_default)
        .or_else(|| accounts.first())
}
