//! Ledger domain models as handed over by the persistence layer.
//!
//! Everything here is read-only from the analytics core's perspective:
//! creation, mutation, and deletion happen in external collaborators.

pub mod account;
pub mod budget;
pub mod transaction;

pub use account::{default_account, Account, AccountKind};
pub use budget::Budget;
pub use transaction::{RecurringInterval, Transaction, TransactionKind};
