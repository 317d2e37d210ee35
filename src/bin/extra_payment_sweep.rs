//! Sweep extra-payment amounts across both strategies
//!
//! Plans the snapshot's debts for every extra payment from 0 to SWEEP_MAX_EXTRA
//! in steps of SWEEP_STEP, under avalanche and snowball, and writes one CSV
//! row per (extra, strategy, debt).
//! Accepts config via environment variables:
//!   FINANCE_SNAPSHOT, SWEEP_MAX_EXTRA, SWEEP_STEP, SWEEP_OUTPUT, FINANCE_REPORTING_CEILING

use anyhow::{bail, Context, Result};
use finance_planner::payoff::DEFAULT_REPORTING_CEILING_MONTHS;
use finance_planner::{FinanceSnapshot, PayoffPlanner, PlannedDebt, PlannerConfig, Strategy};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::time::Instant;

/// One output row
#[derive(Debug, Serialize)]
struct SweepRow {
    extra_payment: f64,
    strategy: Strategy,
    priority_rank: u32,
    debt_id: String,
    debt_name: String,
    monthly_payment: f64,
    /// Empty when the debt never pays off
    months: Option<u64>,
    display_months: String,
}

impl SweepRow {
    fn from_planned(extra_payment: f64, strategy: Strategy, entry: PlannedDebt) -> Self {
        Self {
            extra_payment,
            strategy,
            priority_rank: entry.priority_rank,
            months: entry.payoff.months(),
            debt_id: entry.debt.id,
            debt_name: entry.debt.name,
            monthly_payment: entry.monthly_payment,
            display_months: entry.display_months,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();

    // Read config from environment or use defaults
    let max_extra: f64 = env::var("SWEEP_MAX_EXTRA")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(500.0);

    let step: f64 = env::var("SWEEP_STEP")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(25.0);

    let output_path = env::var("SWEEP_OUTPUT").unwrap_or_else(|_| "extra_payment_sweep.csv".to_string());

    let ceiling: u32 = env::var("FINANCE_REPORTING_CEILING")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REPORTING_CEILING_MONTHS);

    if !(step > 0.0) || max_extra < 0.0 {
        bail!("SWEEP_STEP must be positive and SWEEP_MAX_EXTRA non-negative");
    }

    let snapshot = match env::var("FINANCE_SNAPSHOT") {
        Ok(path) => FinanceSnapshot::from_json_path(&path)
            .with_context(|| format!("failed to load snapshot {}", path))?,
        Err(_) => FinanceSnapshot::sample(),
    };

    let steps = (max_extra / step).floor() as u32;
    let scenarios: Vec<(f64, Strategy)> = (0..=steps)
        .flat_map(|i| {
            let extra = i as f64 * step;
            [(extra, Strategy::Avalanche), (extra, Strategy::Snowball)]
        })
        .collect();

    info!("running {} scenarios over {} debts", scenarios.len(), snapshot.debts.len());

    let planner = PayoffPlanner::new(PlannerConfig {
        reporting_ceiling_months: ceiling,
    });

    // Each scenario is an independent pure plan
    let results: Vec<Vec<SweepRow>> = scenarios
        .par_iter()
        .map(|&(extra, strategy)| -> finance_planner::Result<Vec<SweepRow>> {
            let plan = planner.plan(&snapshot.debts, extra, strategy)?;
            Ok(plan
                .into_iter()
                .map(|entry| SweepRow::from_planned(extra, strategy, entry))
                .collect())
        })
        .collect::<finance_planner::Result<_>>()?;

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;
    for row in results.iter().flatten() {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {}", output_path);
    println!("Scenarios: {}, time: {:?}", scenarios.len(), start.elapsed());

    Ok(())
}
