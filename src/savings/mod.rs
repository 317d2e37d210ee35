//! Savings goal projections

mod projector;

pub use projector::{project, SavingsProjection, SavingsSummary, DAYS_PER_MONTH};
