use chrono::NaiveDate;
use uuid::Uuid;

use ledger_analytics::ledger::{
    Account, AccountKind, RecurringInterval, Transaction, TransactionKind,
};

/// Builds a checking account plus a month of mixed activity on it.
///
/// Layout: one salary deposit on the 1st, a recurring rent payment on
/// the 1st, and daily coffee expenses on the 2nd through the 24th, so
/// suites get 25 transactions spanning three table pages.
pub fn sample_ledger() -> (Account, Vec<Transaction>) {
    let mut account = Account::new("Checking", AccountKind::Current);
    account.is_default = true;

    let mut transactions = vec![
        Transaction::new(
            account.id,
            TransactionKind::Income,
            300_000,
            "salary",
            date(2024, 5, 1),
        )
        .with_description("Monthly salary"),
        Transaction::new(
            account.id,
            TransactionKind::Expense,
            120_000,
            "housing",
            date(2024, 5, 1),
        )
        .with_description("Rent")
        .with_recurrence(RecurringInterval::Monthly, date(2024, 6, 1)),
    ];

    for day in 2..=24 {
        transactions.push(
            Transaction::new(
                account.id,
                TransactionKind::Expense,
                450,
                "food",
                date(2024, 5, day),
            )
            .with_description(format!("Coffee shop #{day}")),
        );
    }

    (account, transactions)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ids_of(transactions: &[Transaction]) -> Vec<Uuid> {
    transactions.iter().map(|t| t.id).collect()
}
