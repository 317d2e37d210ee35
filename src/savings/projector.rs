//! Savings goal projection against a deadline

use crate::error::{ensure_non_negative, Result};
use crate::records::SavingsGoal;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Days treated as one month when spreading the remaining amount
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Derived figures for one goal as of a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjection {
    pub goal_id: String,

    /// Days until the deadline; negative once overdue
    pub days_remaining: i64,

    /// Months used for spreading, floored at one
    pub months_remaining: f64,

    /// Amount still missing (never negative)
    pub remaining_amount: f64,

    /// Whole-unit monthly contribution needed to hit the target on time
    pub required_monthly_contribution: f64,

    pub progress_percent: f64,
    pub is_complete: bool,
    pub is_overdue: bool,
}

/// Project a goal as of `as_of`
///
/// The month count is `days_remaining / 30` with a floor of one month, so a
/// goal that is due soon or overdue asks for the full remainder now.
pub fn project(goal: &SavingsGoal, as_of: NaiveDate) -> Result<SavingsProjection> {
    let target = ensure_non_negative("target_amount", goal.target_amount)?;
    let current = ensure_non_negative("current_amount", goal.current_amount)?;

    let days_remaining = (goal.deadline - as_of).num_days();
    let months_remaining = (days_remaining as f64 / DAYS_PER_MONTH).max(1.0);
    let remaining_amount = (target - current).max(0.0);
    let required_monthly_contribution = (remaining_amount / months_remaining).ceil();
    let is_complete = current >= target;

    let progress_percent = if target > 0.0 {
        current / target * 100.0
    } else {
        100.0
    };

    debug!(
        "goal {}: {} days left, {:.2} per month",
        goal.id, days_remaining, required_monthly_contribution
    );

    Ok(SavingsProjection {
        goal_id: goal.id.clone(),
        days_remaining,
        months_remaining,
        remaining_amount,
        required_monthly_contribution,
        progress_percent,
        is_complete,
        is_overdue: days_remaining < 0 && !is_complete,
    })
}

/// Totals across all goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSummary {
    pub goal_count: usize,
    pub total_saved: f64,
    pub total_target: f64,
    /// Saved over targets, rounded to a whole percent (0 with no targets)
    pub overall_progress_percent: f64,
}

impl SavingsSummary {
    pub fn from_goals(goals: &[SavingsGoal]) -> Self {
        let total_saved: f64 = goals.iter().map(|g| g.current_amount).sum();
        let total_target: f64 = goals.iter().map(|g| g.target_amount).sum();
        let overall_progress_percent = if total_target > 0.0 {
            (total_saved / total_target * 100.0).round()
        } else {
            0.0
        };

        Self {
            goal_count: goals.len(),
            total_saved,
            total_target,
            overall_progress_percent,
        }
    }
}
