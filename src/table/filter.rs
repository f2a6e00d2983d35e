use serde::{Deserialize, Serialize};

use crate::ledger::{Transaction, TransactionKind};

/// User-controlled filter criteria for the transaction table.
///
/// Filters compose with logical AND; each predicate is pure, so the
/// order they are checked in never changes the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring match against the description.
    pub search_term: String,
    pub kind: Option<TransactionKind>,
    pub recurrence: Option<RecurrenceFilter>,
}

impl FilterState {
    /// True when any criterion is active, i.e. the UI should offer a
    /// "clear filters" affordance.
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.kind.is_some() || self.recurrence.is_some()
    }

    fn matches(&self, transaction: &Transaction) -> bool {
        self.matches_search(transaction)
            && self.matches_kind(transaction)
            && self.matches_recurrence(transaction)
    }

    fn matches_search(&self, transaction: &Transaction) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        // A transaction without a description never matches a term.
        match &transaction.description {
            Some(description) => description
                .to_lowercase()
                .contains(&self.search_term.to_lowercase()),
            None => false,
        }
    }

    fn matches_kind(&self, transaction: &Transaction) -> bool {
        match self.kind {
            Some(kind) => transaction.kind == kind,
            None => true,
        }
    }

    fn matches_recurrence(&self, transaction: &Transaction) -> bool {
        match self.recurrence {
            Some(RecurrenceFilter::Recurring) => transaction.is_recurring,
            Some(RecurrenceFilter::NonRecurring) => !transaction.is_recurring,
            None => true,
        }
    }
}

/// Restricts the table to recurring or one-time transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecurrenceFilter {
    Recurring,
    NonRecurring,
}

/// The column and direction the table is ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Newest transactions first, the table's initial ordering.
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortField {
    Date,
    Amount,
    Category,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Applies the filter criteria and sort order to a transaction
/// collection, returning the ordered subset the table renders.
///
/// The sort is stable, so transactions equal under the sort key keep
/// their relative input order in both directions; `Desc` is the exact
/// reversal of the `Asc` comparator rather than a second comparator, so
/// ties break identically either way. An empty result is valid output.
pub fn apply(
    transactions: &[Transaction],
    filter: &FilterState,
    sort: &SortConfig,
) -> Vec<Transaction> {
    let mut result: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Amount => a.amount_cents.cmp(&b.amount_cents),
            SortField::Category => a.category.cmp(&b.category),
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    result
}
