//! Debt payoff projections

mod amortization;
mod strategy;
mod planner;

pub use amortization::{months_to_payoff, monthly_rate, PayoffProjection};
pub use strategy::{order_debts, Strategy};
pub use planner::{
    plan, DebtSummary, PayoffPlanner, PlannedDebt, PlannerConfig,
    DEFAULT_REPORTING_CEILING_MONTHS,
};
