//! Aggregation over the raw transaction collection: the time-bucketed
//! chart series, the monthly category breakdown, and budget utilization.
//!
//! Unlike the table view, these run off the full transaction set for a
//! given account and date scope, never off the filtered view.

pub mod budget_status;
pub mod category;
pub mod timeseries;

pub use budget_status::{BudgetStatus, UtilizationTier};
pub use category::{category_breakdown, month_expense_total, recent_transactions, RECENT_LIMIT};
pub use timeseries::{bucketize, ChartSeries, ChartTotals, DateRange, DayBucket};
