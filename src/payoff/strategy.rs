//! Debt prioritization strategies

use crate::error::FinanceError;
use crate::records::Debt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Rule deciding which debt receives the extra payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first
    #[default]
    Avalanche,
    /// Smallest balance first
    Snowball,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Avalanche => write!(f, "avalanche"),
            Strategy::Snowball => write!(f, "snowball"),
        }
    }
}

impl FromStr for Strategy {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            _ => Err(FinanceError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Order debts by priority without touching the input
///
/// `sort_by` is stable, so ties keep their input order.
pub fn order_debts(debts: &[Debt], strategy: Strategy) -> Vec<&Debt> {
    let mut ordered: Vec<&Debt> = debts.iter().collect();
    match strategy {
        Strategy::Avalanche => {
            ordered.sort_by(|a, b| compare_amounts(b.interest_rate, a.interest_rate))
        }
        Strategy::Snowball => ordered.sort_by(|a, b| compare_amounts(a.balance, b.balance)),
    }
    ordered
}

/// Total order on amounts where `-0.0` and `0.0` tie
fn compare_amounts(a: f64, b: f64) -> Ordering {
    // Adding 0.0 turns -0.0 into 0.0
    (a + 0.0).total_cmp(&(b + 0.0))
}
