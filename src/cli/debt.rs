//! CLI commands for debt payoff planning

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::error::{FincalcError, FincalcResult};
use crate::finance::{compare_strategies, Debt, PayoffStrategy};
use crate::history::CalculatorKind;
use crate::import::{import_debts_file, parse_debt_spec};
use crate::models::parse_amount;
use crate::reports::DebtPayoffReport;

use super::context::Context;

/// Debts to pay off and the extra money available each month
#[derive(Args, Debug)]
pub struct DebtListArgs {
    /// A debt as name:balance:rate:minimum (repeatable)
    #[arg(short, long = "debt", value_name = "SPEC")]
    pub debts: Vec<String>,

    /// CSV file with name, balance, rate and minimum columns
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Extra amount paid each month on top of the minimums
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub extra: f64,
}

impl DebtListArgs {
    /// Debts from the file first, then from `--debt` flags
    pub fn load(&self) -> FincalcResult<Vec<Debt>> {
        let mut debts = match &self.file {
            Some(path) => import_debts_file(path)?,
            None => Vec::new(),
        };

        for spec in &self.debts {
            debts.push(parse_debt_spec(spec)?);
        }

        if debts.is_empty() {
            return Err(FincalcError::Validation(
                "No debts given. Use --debt name:balance:rate:minimum or --file debts.csv".into(),
            ));
        }

        Ok(debts)
    }
}

#[derive(Serialize)]
struct DebtInputs<'a> {
    debts: &'a [Debt],
    extra_payment: f64,
}

/// Debt payoff subcommands
#[derive(Subcommand, Debug)]
pub enum DebtCommands {
    /// Smallest balance first
    Snowball {
        #[command(flatten)]
        list: DebtListArgs,

        /// Export the monthly progress to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Highest interest rate first
    Avalanche {
        #[command(flatten)]
        list: DebtListArgs,

        /// Export the monthly progress to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run both strategies and compare them
    Compare {
        #[command(flatten)]
        list: DebtListArgs,
    },
}

/// Handle debt payoff commands
pub fn handle_debt_command(ctx: &Context, cmd: DebtCommands) -> FincalcResult<()> {
    match cmd {
        DebtCommands::Snowball { list, output } => {
            run_plan(ctx, &list, PayoffStrategy::Snowball, output)
        }
        DebtCommands::Avalanche { list, output } => {
            run_plan(ctx, &list, PayoffStrategy::Avalanche, output)
        }
        DebtCommands::Compare { list } => {
            let debts = list.load()?;
            let comparison = compare_strategies(&debts, list.extra);
            let inputs = DebtInputs {
                debts: &debts,
                extra_payment: list.extra,
            };
            ctx.emit(
                CalculatorKind::DebtPayoff,
                "Snowball vs Avalanche",
                &inputs,
                &comparison,
            )
        }
    }
}

fn run_plan(
    ctx: &Context,
    list: &DebtListArgs,
    strategy: PayoffStrategy,
    output: Option<PathBuf>,
) -> FincalcResult<()> {
    let debts = list.load()?;
    let report = DebtPayoffReport::generate(&debts, list.extra, strategy);
    let inputs = DebtInputs {
        debts: &debts,
        extra_payment: list.extra,
    };

    let title = format!("Debt Payoff ({})", strategy);
    ctx.emit(CalculatorKind::DebtPayoff, &title, &inputs, &report.plan)?;

    if let Some(path) = output {
        return ctx.write_csv(&path, |w| report.export_csv(w));
    }

    ctx.emit_report(&report.format_terminal(ctx.symbol()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn list(debts: &[&str], file: Option<PathBuf>) -> DebtListArgs {
        DebtListArgs {
            debts: debts.iter().map(|s| s.to_string()).collect(),
            file,
            extra: 100.0,
        }
    }

    #[test]
    fn test_load_from_flags() {
        let debts = list(&["Visa:5000:22.9:150", "Car:12000:6.5:300"], None)
            .load()
            .unwrap();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].name, "Visa");
        assert_eq!(debts[1].minimum_payment, 300.0);
    }

    #[test]
    fn test_load_file_then_flags() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,balance,rate,minimum").unwrap();
        writeln!(file, "Student Loan,20000,5,200").unwrap();
        file.flush().unwrap();

        let debts = list(&["Visa:5000:22.9:150"], Some(file.path().to_path_buf()))
            .load()
            .unwrap();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].name, "Student Loan");
        assert_eq!(debts[1].name, "Visa");
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let err = list(&[], None).load().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_bad_spec_is_rejected() {
        let err = list(&["Visa:lots:22.9:150"], None).load().unwrap_err();
        assert!(err.is_validation());
    }
}
