//! Load debt and savings-goal collections from CSV
//!
//! Debts: `id,name,balance,min_payment,interest_rate`
//! Goals: `id,name,target_amount,current_amount,deadline` (deadline as YYYY-MM-DD)

use super::{Debt, SavingsGoal};
use crate::error::{ensure_non_negative, Result};
use chrono::NaiveDate;
use csv::Reader;
use log::{info, warn};
use std::path::Path;

/// Raw CSV row for the debts file
#[derive(Debug, serde::Deserialize)]
struct DebtRow {
    id: String,
    name: String,
    balance: f64,
    min_payment: f64,
    interest_rate: f64,
}

impl DebtRow {
    fn into_debt(self) -> Result<Debt> {
        ensure_non_negative("balance", self.balance)?;
        ensure_non_negative("min_payment", self.min_payment)?;
        ensure_non_negative("interest_rate", self.interest_rate)?;

        let debt = Debt::new(self.id, self.name, self.balance, self.min_payment, self.interest_rate);
        if debt.balance > 0.0 && debt.min_payment <= debt.monthly_interest() {
            warn!(
                "debt {} ({}): minimum payment {:.2} does not cover monthly interest {:.2}",
                debt.id,
                debt.name,
                debt.min_payment,
                debt.monthly_interest()
            );
        }
        Ok(debt)
    }
}

/// Raw CSV row for the savings goals file
#[derive(Debug, serde::Deserialize)]
struct GoalRow {
    id: String,
    name: String,
    target_amount: f64,
    current_amount: f64,
    deadline: NaiveDate,
}

impl GoalRow {
    fn into_goal(self) -> Result<SavingsGoal> {
        ensure_non_negative("target_amount", self.target_amount)?;
        ensure_non_negative("current_amount", self.current_amount)?;
        Ok(SavingsGoal::new(
            self.id,
            self.name,
            self.target_amount,
            self.current_amount,
            self.deadline,
        ))
    }
}

/// Load all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let reader = Reader::from_path(path)?;
    read_debts(reader)
}

/// Load debts from any reader (e.g., string buffer, stdin)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>> {
    read_debts(Reader::from_reader(reader))
}

fn read_debts<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Debt>> {
    let mut debts = Vec::new();
    for result in reader.deserialize() {
        let row: DebtRow = result?;
        debts.push(row.into_debt()?);
    }
    info!("loaded {} debts", debts.len());
    Ok(debts)
}

/// Load all savings goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<SavingsGoal>> {
    let reader = Reader::from_path(path)?;
    read_goals(reader)
}

/// Load savings goals from any reader
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<SavingsGoal>> {
    read_goals(Reader::from_reader(reader))
}

fn read_goals<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<SavingsGoal>> {
    let mut goals = Vec::new();
    for result in reader.deserialize() {
        let row: GoalRow = result?;
        goals.push(row.into_goal()?);
    }
    info!("loaded {} savings goals", goals.len());
    Ok(goals)
}
