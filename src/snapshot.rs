//! Store snapshot and the combined report computed from it
//!
//! The store owns the entity collections; it hands a `FinanceSnapshot` over
//! on every recompute and gets a fresh `FinanceReport` back.

use crate::budget::{summarize_budget, BudgetSummary};
use crate::error::Result;
use crate::income::{summarize_income, IncomeSummary};
use crate::payoff::{DebtSummary, PayoffPlanner, PlannedDebt, PlannerConfig, Strategy};
use crate::records::{BudgetItem, Debt, Income, IncomeFrequency, IncomeKind, SavingsGoal};
use crate::savings::{project, SavingsProjection, SavingsSummary};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read-only copy of every collection, keyed as the store keys them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSnapshot {
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
    #[serde(default)]
    pub incomes: Vec<Income>,
}

/// Per-recompute inputs chosen by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub extra_payment: f64,
    pub strategy: Strategy,
    pub as_of: NaiveDate,
}

/// Everything derived from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceReport {
    pub options: ReportOptions,
    pub debt_summary: DebtSummary,
    pub payoff_plan: Vec<PlannedDebt>,
    pub savings_summary: SavingsSummary,
    pub savings_projections: Vec<SavingsProjection>,
    pub budget: BudgetSummary,
    pub income: IncomeSummary,
}

impl FinanceSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&contents)?;
        info!(
            "loaded snapshot: {} debts, {} goals, {} budget items, {} incomes",
            snapshot.debts.len(),
            snapshot.savings_goals.len(),
            snapshot.budget_items.len(),
            snapshot.incomes.len()
        );
        Ok(snapshot)
    }

    /// Compute the full report; any invalid record fails the whole call
    pub fn report(&self, options: &ReportOptions, config: &PlannerConfig) -> Result<FinanceReport> {
        let planner = PayoffPlanner::new(config.clone());
        let payoff_plan = planner.plan(&self.debts, options.extra_payment, options.strategy)?;

        let savings_projections = self
            .savings_goals
            .iter()
            .map(|goal| project(goal, options.as_of))
            .collect::<Result<Vec<_>>>()?;

        Ok(FinanceReport {
            options: options.clone(),
            debt_summary: DebtSummary::from_debts(&self.debts, options.extra_payment),
            payoff_plan,
            savings_summary: SavingsSummary::from_goals(&self.savings_goals),
            savings_projections,
            budget: summarize_budget(&self.budget_items)?,
            income: summarize_income(&self.incomes)?,
        })
    }

    /// Seed data a fresh household starts with
    pub fn sample() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

        Self {
            debts: vec![
                Debt::new("1", "Credit card", 5000.0, 150.0, 18.5),
                Debt::new("2", "Personal loan", 8000.0, 280.0, 12.0),
                Debt::new("3", "Student loan", 15000.0, 200.0, 8.5),
            ],
            savings_goals: vec![
                SavingsGoal::new("1", "Emergency fund", 10000.0, 3500.0, date(2024, 12, 31)),
                SavingsGoal::new("2", "Trip to Europe", 5000.0, 2200.0, date(2024, 8, 15)),
                SavingsGoal::new("3", "New laptop", 1500.0, 900.0, date(2024, 6, 30)),
            ],
            budget_items: vec![
                BudgetItem::new("1", "Housing", 1000.0, 950.0),
                BudgetItem::new("2", "Groceries", 400.0, 320.0),
                BudgetItem::new("3", "Transport", 200.0, 180.0),
                BudgetItem::new("4", "Entertainment", 150.0, 120.0),
                BudgetItem::new("5", "Savings", 300.0, 300.0),
            ],
            incomes: vec![
                Income {
                    id: "1".to_string(),
                    source: "Payroll - Maria".to_string(),
                    amount: 2500.0,
                    frequency: IncomeFrequency::Monthly,
                    person: "Maria".to_string(),
                    kind: IncomeKind::Salary,
                    next_payment: Some(date(2024, 1, 31)),
                },
                Income {
                    id: "2".to_string(),
                    source: "Payroll - Carlos".to_string(),
                    amount: 3200.0,
                    frequency: IncomeFrequency::Monthly,
                    person: "Carlos".to_string(),
                    kind: IncomeKind::Salary,
                    next_payment: Some(date(2024, 1, 31)),
                },
                Income {
                    id: "3".to_string(),
                    source: "Freelance - Maria".to_string(),
                    amount: 800.0,
                    frequency: IncomeFrequency::Monthly,
                    person: "Maria".to_string(),
                    kind: IncomeKind::Freelance,
                    next_payment: Some(date(2024, 2, 15)),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::payoff::PayoffProjection;

    fn options() -> ReportOptions {
        ReportOptions {
            extra_payment: 100.0,
            strategy: Strategy::Avalanche,
            as_of: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_sample_report() {
        let report = FinanceSnapshot::sample()
            .report(&options(), &PlannerConfig::default())
            .unwrap();

        assert_eq!(report.payoff_plan.len(), 3);
        assert_eq!(report.payoff_plan[0].debt.name, "Credit card");
        assert_eq!(report.payoff_plan[0].monthly_payment, 250.0);
        assert_eq!(report.payoff_plan[0].payoff, PayoffProjection::Months(18));

        assert_eq!(report.debt_summary.total_balance, 28000.0);
        assert_eq!(report.savings_projections.len(), 3);
        assert_eq!(report.savings_projections[0].required_monthly_contribution, 535.0);
        assert_eq!(report.savings_summary.overall_progress_percent, 40.0);
        assert_eq!(report.budget.total_allocated, 2050.0);
        assert_eq!(report.income.monthly_total, 6500.0);
    }

    #[test]
    fn test_report_is_idempotent() {
        let snapshot = FinanceSnapshot::sample();
        let config = PlannerConfig::default();
        let a = snapshot.report(&options(), &config).unwrap();
        let b = snapshot.report(&options(), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_snapshot_reports_empty() {
        let report = FinanceSnapshot::default()
            .report(&options(), &PlannerConfig::default())
            .unwrap();
        assert!(report.payoff_plan.is_empty());
        assert!(report.savings_projections.is_empty());
        assert_eq!(report.income.monthly_total, 0.0);
    }

    #[test]
    fn test_invalid_goal_fails_report() {
        let mut snapshot = FinanceSnapshot::sample();
        snapshot.savings_goals[1].target_amount = -5.0;
        let err = snapshot.report(&options(), &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { name: "target_amount", .. }));
    }

    #[test]
    fn test_snapshot_json_uses_store_keys() {
        let json = r#"{
            "debts": [
                {"id":"1","name":"Card","balance":1200,"minPayment":60,"interestRate":0}
            ],
            "savingsGoals": [
                {"id":"g","name":"Fund","targetAmount":600,"currentAmount":0,"deadline":"2024-07-01"}
            ]
        }"#;
        let snapshot = FinanceSnapshot::from_json_str(json).unwrap();
        assert_eq!(snapshot.debts[0].min_payment, 60.0);
        assert_eq!(snapshot.savings_goals[0].target_amount, 600.0);
        assert!(snapshot.budget_items.is_empty());
        assert!(snapshot.incomes.is_empty());

        let report = snapshot.report(&options(), &PlannerConfig::default()).unwrap();
        // 1200 / (60 + 100) = 7.5 -> 8
        assert_eq!(report.payoff_plan[0].payoff, PayoffProjection::Months(8));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snapshot = FinanceSnapshot::sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"savingsGoals\""));
        assert_eq!(FinanceSnapshot::from_json_str(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            FinanceSnapshot::from_json_str("{not json"),
            Err(FinanceError::Json(_))
        ));
    }
}
