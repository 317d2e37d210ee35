//! Entity records owned by the external store
//!
//! The calculators only ever read these. Field names serialize in camelCase
//! so a store's collection blobs deserialize directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A debt being paid down with a fixed monthly minimum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Opaque unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Outstanding balance
    pub balance: f64,

    /// Required minimum monthly payment
    pub min_payment: f64,

    /// Annual interest rate as a percentage (18.5 = 18.5%)
    pub interest_rate: f64,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        min_payment: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            min_payment,
            interest_rate,
        }
    }

    /// Interest accrued over one month at the simple monthly rate
    pub fn monthly_interest(&self) -> f64 {
        self.balance * self.interest_rate / 100.0 / 12.0
    }
}

/// A savings goal with a target amount and a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
}

impl SavingsGoal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount,
            deadline,
        }
    }
}

/// A monthly budget category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: String,
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
}

impl BudgetItem {
    pub fn new(id: impl Into<String>, category: impl Into<String>, allocated: f64, spent: f64) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            allocated,
            spent,
        }
    }
}

/// How often an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl IncomeFrequency {
    /// Convert one payment at this frequency into a monthly equivalent
    ///
    /// Weekly and biweekly use the fixed factors 4.33 and 2.17.
    pub fn to_monthly(self, amount: f64) -> f64 {
        match self {
            IncomeFrequency::Weekly => amount * 4.33,
            IncomeFrequency::Biweekly => amount * 2.17,
            IncomeFrequency::Monthly => amount,
            IncomeFrequency::Yearly => amount / 12.0,
        }
    }
}

/// Category of an income source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeKind {
    Salary,
    Freelance,
    Business,
    Investment,
    Rental,
    #[default]
    Other,
}

/// A recurring income source attributed to a household member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    pub source: String,
    pub amount: f64,
    pub frequency: IncomeFrequency,
    pub person: String,
    #[serde(rename = "type", default)]
    pub kind: IncomeKind,
    #[serde(default)]
    pub next_payment: Option<NaiveDate>,
}

impl Income {
    /// Monthly equivalent of this income
    pub fn monthly_amount(&self) -> f64 {
        self.frequency.to_monthly(self.amount)
    }
}
