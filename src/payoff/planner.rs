//! Payoff planner: strategy ordering plus one shared extra payment
//!
//! The whole extra payment goes to the rank-1 debt; every other debt is
//! projected at its minimum. This is a single snapshot per debt, not a
//! month-by-month simulation, so payments freed up when a debt clears are
//! not rolled onto the next one.

use super::amortization::{months_to_payoff, PayoffProjection};
use super::strategy::{order_debts, Strategy};
use crate::error::{ensure_non_negative, Result};
use crate::records::Debt;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default reporting ceiling in months
pub const DEFAULT_REPORTING_CEILING_MONTHS: u32 = 100;

/// Configuration for a planning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Payoffs longer than this (or never) are flagged and displayed as `"{ceiling}+"`
    pub reporting_ceiling_months: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            reporting_ceiling_months: DEFAULT_REPORTING_CEILING_MONTHS,
        }
    }
}

/// One debt's place in the payoff plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedDebt {
    pub debt: Debt,

    /// 1-based priority rank
    pub priority_rank: u32,

    /// Extra payment allocated to this debt (zero below rank 1)
    pub extra_payment: f64,

    /// Minimum plus allocated extra
    pub monthly_payment: f64,

    /// Computed payoff, never capped
    pub payoff: PayoffProjection,

    /// Payoff exceeds the reporting ceiling or never happens
    pub beyond_ceiling: bool,

    /// Presentation value, e.g. `"18"` or `"100+"`
    pub display_months: String,
}

impl PlannedDebt {
    pub fn is_priority(&self) -> bool {
        self.priority_rank == 1
    }
}

/// Totals across the debt collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    pub debt_count: usize,
    pub total_balance: f64,
    pub total_minimum_payment: f64,
    /// Extra payment over a year (`extra_payment * 12`)
    pub annual_extra_payment: f64,
}

impl DebtSummary {
    pub fn from_debts(debts: &[Debt], extra_payment: f64) -> Self {
        Self {
            debt_count: debts.len(),
            total_balance: debts.iter().map(|d| d.balance).sum(),
            total_minimum_payment: debts.iter().map(|d| d.min_payment).sum(),
            annual_extra_payment: extra_payment * 12.0,
        }
    }
}

/// Planner applying a reporting configuration to every plan it builds
#[derive(Debug, Clone, Default)]
pub struct PayoffPlanner {
    config: PlannerConfig,
}

impl PayoffPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build the priority-ordered payoff plan
    ///
    /// Fails with `InvalidArgument` for a negative extra payment or a debt
    /// with a negative balance, minimum payment or rate.
    pub fn plan(
        &self,
        debts: &[Debt],
        extra_payment: f64,
        strategy: Strategy,
    ) -> Result<Vec<PlannedDebt>> {
        let extra_payment = ensure_non_negative("extra_payment", extra_payment)?;
        let ceiling = self.config.reporting_ceiling_months;

        order_debts(debts, strategy)
            .into_iter()
            .enumerate()
            .map(|(index, debt)| -> Result<PlannedDebt> {
                let rank = index as u32 + 1;
                let extra = if rank == 1 { extra_payment } else { 0.0 };
                let min_payment = ensure_non_negative("min_payment", debt.min_payment)?;
                let monthly_payment = min_payment + extra;
                let payoff = months_to_payoff(debt.balance, debt.interest_rate, monthly_payment)?;

                debug!(
                    "{} #{} {}: payment {:.2} -> {}",
                    strategy, rank, debt.id, monthly_payment, payoff
                );

                Ok(PlannedDebt {
                    debt: debt.clone(),
                    priority_rank: rank,
                    extra_payment: extra,
                    monthly_payment,
                    payoff,
                    beyond_ceiling: payoff.exceeds(ceiling),
                    display_months: payoff.display_capped(ceiling),
                })
            })
            .collect()
    }
}

/// Plan with the default reporting ceiling
pub fn plan(debts: &[Debt], extra_payment: f64, strategy: Strategy) -> Result<Vec<PlannedDebt>> {
    PayoffPlanner::default().plan(debts, extra_payment, strategy)
}
