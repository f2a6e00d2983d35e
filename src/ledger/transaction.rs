use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ledger entry for one account.
///
/// Amounts are stored in currency minor units so aggregate sums stay
/// exact. The recurrence fields travel together: `recurring_interval`
/// and `next_recurring_date` are present iff `is_recurring` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub account_id: Uuid,
    pub amount_cents: i64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_interval: Option<RecurringInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_recurring_date: Option<NaiveDate>,
}

impl Transaction {
    pub fn new(
        account_id: Uuid,
        kind: TransactionKind,
        amount_cents: i64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            amount_cents,
            kind,
            category: category.into(),
            date,
            description: None,
            is_recurring: false,
            recurring_interval: None,
            next_recurring_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the transaction as recurring, keeping the flag and the two
    /// recurrence fields consistent.
    pub fn with_recurrence(mut self, interval: RecurringInterval, next_date: NaiveDate) -> Self {
        self.is_recurring = true;
        self.recurring_interval = Some(interval);
        self.next_recurring_date = Some(next_date);
        self
    }
}

/// Direction of a ledger entry.
///
/// Aggregation treats anything that is not [`TransactionKind::Income`] as
/// an expense; see [`crate::summary::timeseries`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Cadence of a recurring transaction.
///
/// Projecting future occurrences is the scheduler's job, not this
/// crate's; the interval is carried for filtering and display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurringInterval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringInterval {
    pub fn label(&self) -> &'static str {
        match self {
            RecurringInterval::Daily => "Daily",
            RecurringInterval::Weekly => "Weekly",
            RecurringInterval::Monthly => "Monthly",
            RecurringInterval::Yearly => "Yearly",
        }
    }
}
