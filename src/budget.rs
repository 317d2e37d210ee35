//! Budget category usage

use crate::error::{ensure_non_negative, Result};
use crate::records::BudgetItem;
use serde::{Deserialize, Serialize};

/// Usage of one budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub id: String,
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    /// `spent / allocated * 100`; `None` when nothing is allocated
    pub usage_percent: Option<f64>,
    pub is_over_budget: bool,
}

/// Totals and per-category usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_allocated: f64,
    pub total_spent: f64,
    /// Allocated minus spent; negative when overspent overall
    pub remaining: f64,
    pub items: Vec<BudgetUsage>,
}

impl BudgetSummary {
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetUsage> {
        self.items.iter().filter(|u| u.is_over_budget)
    }
}

pub fn summarize_budget(items: &[BudgetItem]) -> Result<BudgetSummary> {
    let mut usages = Vec::with_capacity(items.len());
    let mut total_allocated = 0.0;
    let mut total_spent = 0.0;

    for item in items {
        let allocated = ensure_non_negative("allocated", item.allocated)?;
        let spent = ensure_non_negative("spent", item.spent)?;
        total_allocated += allocated;
        total_spent += spent;

        usages.push(BudgetUsage {
            id: item.id.clone(),
            category: item.category.clone(),
            allocated,
            spent,
            usage_percent: (allocated > 0.0).then(|| spent / allocated * 100.0),
            is_over_budget: spent > allocated,
        });
    }

    Ok(BudgetSummary {
        total_allocated,
        total_spent,
        remaining: total_allocated - total_spent,
        items: usages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use approx::assert_relative_eq;

    #[test]
    fn test_budget_totals() {
        let items = vec![
            BudgetItem::new("1", "Housing", 1000.0, 950.0),
            BudgetItem::new("2", "Food", 400.0, 320.0),
            BudgetItem::new("3", "Transport", 200.0, 180.0),
        ];
        let summary = summarize_budget(&items).unwrap();
        assert_relative_eq!(summary.total_allocated, 1600.0);
        assert_relative_eq!(summary.total_spent, 1450.0);
        assert_relative_eq!(summary.remaining, 150.0);
        assert_relative_eq!(summary.items[1].usage_percent.unwrap(), 80.0);
        assert_eq!(summary.over_budget().count(), 0);
    }

    #[test]
    fn test_overspent_category() {
        let items = vec![BudgetItem::new("4", "Fun", 150.0, 210.0)];
        let summary = summarize_budget(&items).unwrap();
        assert!(summary.items[0].is_over_budget);
        assert_relative_eq!(summary.items[0].usage_percent.unwrap(), 140.0);
        assert_relative_eq!(summary.remaining, -60.0);
        assert_eq!(summary.over_budget().count(), 1);
    }

    #[test]
    fn test_exactly_spent_is_not_over() {
        let summary = summarize_budget(&[BudgetItem::new("5", "Savings", 300.0, 300.0)]).unwrap();
        assert!(!summary.items[0].is_over_budget);
    }

    #[test]
    fn test_zero_allocation_has_no_percentage() {
        let summary = summarize_budget(&[BudgetItem::new("6", "Misc", 0.0, 20.0)]).unwrap();
        assert!(summary.items[0].usage_percent.is_none());
        assert!(summary.items[0].is_over_budget);
    }

    #[test]
    fn test_negative_spent_rejected() {
        let err = summarize_budget(&[BudgetItem::new("7", "Bad", 10.0, -1.0)]).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { name: "spent", .. }));
    }
}
