use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::ledger::{Transaction, TransactionKind};

/// How many recent transactions the dashboard shows per account.
pub const RECENT_LIMIT: usize = 5;

/// Sums one account's expenses per category for the calendar month
/// containing `reference`.
///
/// Categories with no matching transactions are absent from the map,
/// not present with zero. The map is ordered by category key so render
/// output is deterministic.
pub fn category_breakdown(
    transactions: &[Transaction],
    account_id: Uuid,
    reference: NaiveDate,
) -> BTreeMap<String, i64> {
    let mut breakdown = BTreeMap::new();
    for transaction in month_expenses(transactions, account_id, reference) {
        *breakdown.entry(transaction.category.clone()).or_insert(0) += transaction.amount_cents;
    }
    breakdown
}

/// Total expenses for the account in the calendar month containing
/// `reference`; the period total the budget monitor consumes.
pub fn month_expense_total(
    transactions: &[Transaction],
    account_id: Uuid,
    reference: NaiveDate,
) -> i64 {
    month_expenses(transactions, account_id, reference)
        .map(|transaction| transaction.amount_cents)
        .sum()
}

/// The account's most recent transactions, newest first, truncated to
/// `limit`. Same-day ties keep their input order.
pub fn recent_transactions(
    transactions: &[Transaction],
    account_id: Uuid,
    limit: usize,
) -> Vec<Transaction> {
    let mut recent: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.account_id == account_id)
        .cloned()
        .collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

fn month_expenses(
    transactions: &[Transaction],
    account_id: Uuid,
    reference: NaiveDate,
) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(move |transaction| {
        transaction.account_id == account_id
            && transaction.kind == TransactionKind::Expense
            && transaction.date.month() == reference.month()
            && transaction.date.year() == reference.year()
    })
}
