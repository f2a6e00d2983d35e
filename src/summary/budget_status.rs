use serde::{Deserialize, Serialize};

use crate::ledger::Budget;

const WARNING_PERCENT: f64 = 75.0;
const CRITICAL_PERCENT: f64 = 90.0;

/// Budget-utilization severity, with inclusive lower bounds: warning at
/// 75%, critical at 90%.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UtilizationTier {
    Normal,
    Warning,
    Critical,
}

impl UtilizationTier {
    fn for_percent(percent_used: f64) -> Self {
        if percent_used >= CRITICAL_PERCENT {
            UtilizationTier::Critical
        } else if percent_used >= WARNING_PERCENT {
            UtilizationTier::Warning
        } else {
            UtilizationTier::Normal
        }
    }
}

/// Utilization of a period's budget by that period's expense total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetStatus {
    /// Raw percentage spent. Deliberately unclamped: overspend reads as
    /// more than 100, and capping the progress-bar width is the
    /// renderer's concern.
    pub percent_used: f64,
    pub tier: UtilizationTier,
}

impl BudgetStatus {
    /// Evaluates a period's spend against its budget.
    ///
    /// `None` when no budget is set or its amount is non-positive —
    /// "no budget" is a distinct state the caller renders differently
    /// from 0% used, and guarding here keeps the division total.
    pub fn evaluate(budget: Option<&Budget>, period_expense_cents: i64) -> Option<BudgetStatus> {
        let budget = budget?;
        if budget.amount_cents <= 0 {
            return None;
        }
        let percent_used = (period_expense_cents as f64 / budget.amount_cents as f64) * 100.0;
        Some(BudgetStatus {
            percent_used,
            tier: UtilizationTier::for_percent(percent_used),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds_are_inclusive_at_the_lower_bound() {
        let budget = Budget::new(1_000);
        let critical = BudgetStatus::evaluate(Some(&budget), 950).unwrap();
        assert_eq!(critical.percent_used, 95.0);
        assert_eq!(critical.tier, UtilizationTier::Critical);

        let warning = BudgetStatus::evaluate(Some(&budget), 800).unwrap();
        assert_eq!(warning.tier, UtilizationTier::Warning);

        let normal = BudgetStatus::evaluate(Some(&budget), 100).unwrap();
        assert_eq!(normal.tier, UtilizationTier::Normal);

        // Exact boundaries.
        assert_eq!(
            BudgetStatus::evaluate(Some(&budget), 900).unwrap().tier,
            UtilizationTier::Critical
        );
        assert_eq!(
            BudgetStatus::evaluate(Some(&budget), 750).unwrap().tier,
            UtilizationTier::Warning
        );
        assert_eq!(
            BudgetStatus::evaluate(Some(&budget), 749).unwrap().tier,
            UtilizationTier::Normal
        );
    }

    #[test]
    fn missing_or_non_positive_budget_yields_no_status() {
        assert!(BudgetStatus::evaluate(None, 500).is_none());
        assert!(BudgetStatus::evaluate(Some(&Budget::new(0)), 500).is_none());
        assert!(BudgetStatus::evaluate(Some(&Budget::new(-100)), 500).is_none());
    }

    #[test]
    fn overspend_is_reported_unclamped() {
        let budget = Budget::new(1_000);
        let status = BudgetStatus::evaluate(Some(&budget), 1_500).unwrap();
        assert_eq!(status.percent_used, 150.0);
        assert_eq!(status.tier, UtilizationTier::Critical);
    }

    #[test]
    fn zero_spend_is_zero_percent_normal() {
        let budget = Budget::new(1_000);
        let status = BudgetStatus::evaluate(Some(&budget), 0).unwrap();
        assert_eq!(status.percent_used, 0.0);
        assert_eq!(status.tier, UtilizationTier::Normal);
    }
}
