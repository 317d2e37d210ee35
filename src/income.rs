//! Monthly income normalization and per-person breakdown

use crate::error::{ensure_non_negative, Result};
use crate::records::Income;
use serde::{Deserialize, Serialize};

/// Monthly income attributed to one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonIncome {
    pub person: String,
    pub source_count: usize,
    pub monthly_amount: f64,
    /// Share of the household monthly total (0 when the total is zero)
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSummary {
    pub monthly_total: f64,
    /// In order of each person's first income
    pub by_person: Vec<PersonIncome>,
}

/// Sum of all incomes converted to a monthly basis
pub fn monthly_total(incomes: &[Income]) -> f64 {
    incomes.iter().map(Income::monthly_amount).sum()
}

pub fn summarize_income(incomes: &[Income]) -> Result<IncomeSummary> {
    let mut by_person: Vec<PersonIncome> = Vec::new();

    for income in incomes {
        ensure_non_negative("amount", income.amount)?;
        let monthly = income.monthly_amount();

        match by_person.iter_mut().find(|p| p.person == income.person) {
            Some(entry) => {
                entry.source_count += 1;
                entry.monthly_amount += monthly;
            }
            None => by_person.push(PersonIncome {
                person: income.person.clone(),
                source_count: 1,
                monthly_amount: monthly,
                share_percent: 0.0,
            }),
        }
    }

    let total = monthly_total(incomes);
    if total > 0.0 {
        for entry in &mut by_person {
            entry.share_percent = entry.monthly_amount / total * 100.0;
        }
    }

    Ok(IncomeSummary {
        monthly_total: total,
        by_person,
    })
}
