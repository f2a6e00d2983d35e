use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AnalyticsError;
use crate::ledger::{Transaction, TransactionKind};

/// The fixed catalog of chart date ranges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateRange {
    Last7Days,
    Last30Days,
    Last90Days,
    Last180Days,
    AllTime,
}

impl DateRange {
    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Last7Days => "Last 7 Days",
            DateRange::Last30Days => "Last Month",
            DateRange::Last90Days => "Last 3 Months",
            DateRange::Last180Days => "Last 6 Months",
            DateRange::AllTime => "All Time",
        }
    }

    fn days(&self) -> Option<i64> {
        match self {
            DateRange::Last7Days => Some(7),
            DateRange::Last30Days => Some(30),
            DateRange::Last90Days => Some(90),
            DateRange::Last180Days => Some(180),
            DateRange::AllTime => None,
        }
    }

    /// Lower bound of the range, or `None` for the unbounded catalog
    /// entry.
    pub fn start_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.days().map(|days| today - Duration::days(days))
    }
}

impl FromStr for DateRange {
    type Err = AnalyticsError;

    /// Parses the range-selector keys the UI sends.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "7D" => Ok(DateRange::Last7Days),
            "1M" => Ok(DateRange::Last30Days),
            "3M" => Ok(DateRange::Last90Days),
            "6M" => Ok(DateRange::Last180Days),
            "ALL" => Ok(DateRange::AllTime),
            other => Err(AnalyticsError::UnknownDateRange(other.to_string())),
        }
    }
}

/// One calendar day's aggregated income and expense totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub income_cents: i64,
    pub expense_cents: i64,
}

impl DayBucket {
    fn new(day: NaiveDate) -> Self {
        Self {
            day,
            income_cents: 0,
            expense_cents: 0,
        }
    }

    /// Axis label in the chart's "May 01" form. Ordering always uses
    /// `day` itself, never this string.
    pub fn label(&self) -> String {
        self.day.format("%b %d").to_string()
    }
}

/// Running totals across every bucket in a series.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartTotals {
    pub income_cents: i64,
    pub expense_cents: i64,
}

impl ChartTotals {
    pub fn net_cents(&self) -> i64 {
        self.income_cents - self.expense_cents
    }
}

/// The chart's data: day buckets in ascending calendar order plus the
/// range totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartSeries {
    pub buckets: Vec<DayBucket>,
    pub totals: ChartTotals,
}

/// Buckets transactions into calendar-day income/expense totals for the
/// chart.
///
/// Transactions dated inside `[range start, today]` are grouped by
/// calendar day regardless of input order; days with no activity are not
/// synthesized, so the series is sparse by design. Income sums
/// [`TransactionKind::Income`]; every other kind lands in the expense
/// sum — an explicit fallback, not an accident.
pub fn bucketize(transactions: &[Transaction], range: DateRange, today: NaiveDate) -> ChartSeries {
    let start = range.start_from(today);

    let mut by_day: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();
    for transaction in transactions {
        if transaction.date > today {
            continue;
        }
        if let Some(start) = start {
            if transaction.date < start {
                continue;
            }
        }
        let bucket = by_day
            .entry(transaction.date)
            .or_insert_with(|| DayBucket::new(transaction.date));
        match transaction.kind {
            TransactionKind::Income => bucket.income_cents += transaction.amount_cents,
            _ => bucket.expense_cents += transaction.amount_cents,
        }
    }

    let mut totals = ChartTotals::default();
    let buckets: Vec<DayBucket> = by_day.into_values().collect();
    for bucket in &buckets {
        totals.income_cents += bucket.income_cents;
        totals.expense_cents += bucket.expense_cents;
    }

    ChartSeries { buckets, totals }
}
