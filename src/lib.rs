//! Finance Planner - Debt payoff and savings projection engine
//!
//! This library provides:
//! - Debt payoff timelines under a fixed monthly payment
//! - Avalanche and snowball prioritization of a debt collection
//! - Payoff plans with one shared extra payment
//! - Savings goal contributions against a deadline
//! - Budget usage and household income summaries

pub mod error;
pub mod records;
pub mod payoff;
pub mod savings;
pub mod budget;
pub mod income;
pub mod snapshot;

// Re-export commonly used types
pub use error::{FinanceError, Result};
pub use records::{BudgetItem, Debt, Income, IncomeFrequency, IncomeKind, SavingsGoal};
pub use payoff::{
    months_to_payoff, order_debts, plan, PayoffPlanner, PayoffProjection, PlannedDebt,
    PlannerConfig, Strategy,
};
pub use savings::{project, SavingsProjection};
pub use snapshot::{FinanceReport, FinanceSnapshot, ReportOptions};
