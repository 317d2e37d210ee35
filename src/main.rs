//! Finance Planner CLI
//!
//! Prints payoff plans, savings projections or a full JSON report for a
//! snapshot file, CSV collections, or the built-in sample household.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use finance_planner::payoff::{DebtSummary, DEFAULT_REPORTING_CEILING_MONTHS};
use finance_planner::records::{load_debts, load_goals};
use finance_planner::savings::SavingsSummary;
use finance_planner::{
    project, FinanceSnapshot, PayoffPlanner, PlannerConfig, ReportOptions, Strategy,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "finance_planner")]
#[command(about = "Debt payoff and savings projections for a household snapshot")]
struct Cli {
    /// Snapshot JSON with debts, savingsGoals, budgetItems and incomes
    #[arg(long, global = true, env = "FINANCE_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Payoffs longer than this many months are shown as "N+"
    #[arg(long, global = true, env = "FINANCE_REPORTING_CEILING", default_value_t = DEFAULT_REPORTING_CEILING_MONTHS)]
    ceiling: u32,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct PayoffArgs {
    /// Extra monthly payment thrown at the top-priority debt
    #[arg(long, env = "FINANCE_EXTRA_PAYMENT", default_value_t = 0.0)]
    extra: f64,

    /// Prioritization strategy: avalanche or snowball
    #[arg(long, env = "FINANCE_STRATEGY", default_value_t = Strategy::Avalanche)]
    strategy: Strategy,
}

#[derive(Args, Debug)]
struct DateArgs {
    /// Projection date (YYYY-MM-DD), defaults to today
    #[arg(long, env = "FINANCE_AS_OF")]
    as_of: Option<NaiveDate>,
}

impl DateArgs {
    fn resolve(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Priority-ordered payoff plan
    Debts {
        /// Debts CSV (id,name,balance,min_payment,interest_rate)
        #[arg(long)]
        debts: Option<PathBuf>,

        #[command(flatten)]
        payoff: PayoffArgs,
    },
    /// Monthly contribution needed for each savings goal
    Goals {
        /// Goals CSV (id,name,target_amount,current_amount,deadline)
        #[arg(long)]
        goals: Option<PathBuf>,

        #[command(flatten)]
        date: DateArgs,
    },
    /// Full report across all collections
    Report {
        #[command(flatten)]
        payoff: PayoffArgs,

        #[command(flatten)]
        date: DateArgs,
    },
}

fn load_snapshot(path: Option<&PathBuf>) -> Result<FinanceSnapshot> {
    match path {
        Some(path) => FinanceSnapshot::from_json_path(path)
            .with_context(|| format!("failed to load snapshot {}", path.display())),
        None => Ok(FinanceSnapshot::sample()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlannerConfig {
        reporting_ceiling_months: cli.ceiling,
    };
    let snapshot = load_snapshot(cli.snapshot.as_ref())?;

    match &cli.command {
        Command::Debts { debts, payoff } => {
            let debts = match debts {
                Some(path) => load_debts(path)
                    .with_context(|| format!("failed to load debts {}", path.display()))?,
                None => snapshot.debts.clone(),
            };
            print_payoff_plan(&debts, payoff, &config, cli.json)
        }
        Command::Goals { goals, date } => {
            let goals = match goals {
                Some(path) => load_goals(path)
                    .with_context(|| format!("failed to load goals {}", path.display()))?,
                None => snapshot.savings_goals.clone(),
            };
            print_goals(&goals, date.resolve(), cli.json)
        }
        Command::Report { payoff, date } => {
            let options = ReportOptions {
                extra_payment: payoff.extra,
                strategy: payoff.strategy,
                as_of: date.resolve(),
            };
            let report = snapshot.report(&options, &config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

fn print_payoff_plan(
    debts: &[finance_planner::Debt],
    args: &PayoffArgs,
    config: &PlannerConfig,
    json: bool,
) -> Result<()> {
    let planner = PayoffPlanner::new(config.clone());
    let plan = planner.plan(debts, args.extra, args.strategy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let summary = DebtSummary::from_debts(debts, args.extra);
    println!("Payoff plan ({}, extra ${:.2}/month)", args.strategy, args.extra);
    println!("  Total debt:            ${:.2}", summary.total_balance);
    println!("  Total minimum payment: ${:.2}", summary.total_minimum_payment);
    println!("  Extra per year:        ${:.2}", summary.annual_extra_payment);
    println!();
    println!("{:>4} {:<24} {:>12} {:>8} {:>10} {:>8}",
        "Rank", "Debt", "Balance", "Rate", "Payment", "Months");
    println!("{}", "-".repeat(71));

    for entry in &plan {
        println!("{:>4} {:<24} {:>12.2} {:>7.2}% {:>10.2} {:>8}",
            entry.priority_rank,
            entry.debt.name,
            entry.debt.balance,
            entry.debt.interest_rate,
            entry.monthly_payment,
            entry.display_months,
        );
    }

    if let Some(top) = plan.first() {
        if args.extra > 0.0 && !top.beyond_ceiling {
            println!("\nWith ${:.2} extra each month, {} is paid off in {} months",
                args.extra, top.debt.name, top.display_months);
        }
    }

    Ok(())
}

fn print_goals(goals: &[finance_planner::SavingsGoal], as_of: NaiveDate, json: bool) -> Result<()> {
    let projections = goals
        .iter()
        .map(|goal| project(goal, as_of))
        .collect::<finance_planner::Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projections)?);
        return Ok(());
    }

    let summary = SavingsSummary::from_goals(goals);
    println!("Savings goals as of {}", as_of);
    println!("  Saved:    ${:.2}", summary.total_saved);
    println!("  Targets:  ${:.2}", summary.total_target);
    println!("  Progress: {:.0}%", summary.overall_progress_percent);
    println!();
    println!("{:<24} {:>10} {:>10} {:>8} {:>10} {:>12}",
        "Goal", "Saved", "Target", "Progress", "Days left", "Per month");
    println!("{}", "-".repeat(79));

    for (goal, projection) in goals.iter().zip(&projections) {
        let days = if projection.is_overdue {
            "overdue".to_string()
        } else {
            projection.days_remaining.to_string()
        };
        let monthly = if projection.is_complete {
            "done".to_string()
        } else {
            format!("{:.0}", projection.required_monthly_contribution)
        };
        println!("{:<24} {:>10.2} {:>10.2} {:>7.1}% {:>10} {:>12}",
            goal.name,
            goal.current_amount,
            goal.target_amount,
            projection.progress_percent,
            days,
            monthly,
        );
    }

    Ok(())
}
