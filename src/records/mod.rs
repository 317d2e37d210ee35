//! Entity records and CSV loading

mod data;
pub mod loader;

pub use data::{BudgetItem, Debt, Income, IncomeFrequency, IncomeKind, SavingsGoal};
pub use loader::{load_debts, load_debts_from_reader, load_goals, load_goals_from_reader};
