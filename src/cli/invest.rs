//! CLI commands for growth and the time value of money

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::display::Figure;
use crate::error::FincalcResult;
use crate::finance::{
    calculate_cagr, calculate_compound_interest, calculate_inflation, calculate_roi,
    calculate_simple_interest, future_value, future_value_of_annuity, present_value,
    present_value_of_annuity, rule_of_72, CompoundingFrequency,
};
use crate::history::CalculatorKind;
use crate::models::{parse_amount, parse_percent};
use crate::reports::ProjectionReport;

use super::context::Context;

/// Compound interest arguments
#[derive(Args, Debug, Serialize)]
pub struct CompoundArgs {
    /// Starting principal
    #[arg(short, long, value_parser = parse_amount)]
    pub principal: f64,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = parse_percent)]
    pub rate: f64,

    /// Number of years
    #[arg(short, long)]
    pub years: u32,

    /// Compounding frequency (annually, semi-annually, quarterly, monthly, daily)
    #[arg(short, long)]
    pub frequency: Option<CompoundingFrequency>,

    /// Amount added at the end of every month
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub contribution: f64,

    /// Export the yearly breakdown to a CSV file
    #[arg(short, long)]
    #[serde(skip)]
    pub output: Option<PathBuf>,
}

/// Handle the compound interest command
pub fn handle_compound_command(ctx: &Context, mut args: CompoundArgs) -> FincalcResult<()> {
    let frequency = *args
        .frequency
        .get_or_insert(ctx.settings.default_compounding);

    let result = calculate_compound_interest(
        args.principal,
        args.rate,
        args.years,
        frequency,
        args.contribution,
    );
    let report = ProjectionReport::from_compound(&result);

    ctx.emit(CalculatorKind::CompoundInterest, "Compound Interest", &args, &result)?;

    if let Some(path) = &args.output {
        return ctx.write_csv(path, |w| report.export_csv(w));
    }

    ctx.emit_report(&report.format_terminal(ctx.symbol()));
    Ok(())
}

/// Simple interest arguments
#[derive(Args, Debug, Serialize)]
pub struct SimpleInterestArgs {
    /// Principal
    #[arg(short, long, value_parser = parse_amount)]
    pub principal: f64,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = parse_percent)]
    pub rate: f64,

    /// Number of years (fractions allowed)
    #[arg(short, long)]
    pub years: f64,
}

pub fn handle_simple_interest_command(ctx: &Context, args: SimpleInterestArgs) -> FincalcResult<()> {
    let result = calculate_simple_interest(args.principal, args.rate, args.years);
    ctx.emit(CalculatorKind::SimpleInterest, "Simple Interest", &args, &result)
}

/// CAGR arguments
#[derive(Args, Debug, Serialize)]
pub struct CagrArgs {
    /// Value at the start of the period
    #[arg(short, long, value_parser = parse_amount)]
    pub start: f64,

    /// Value at the end of the period
    #[arg(short, long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub end: f64,

    /// Length of the period in years
    #[arg(short, long)]
    pub years: f64,
}

pub fn handle_cagr_command(ctx: &Context, args: CagrArgs) -> FincalcResult<()> {
    let result = Figure::percent("CAGR", calculate_cagr(args.start, args.end, args.years));
    ctx.emit(CalculatorKind::Cagr, "Compound Annual Growth Rate", &args, &result)
}

/// ROI arguments
#[derive(Args, Debug, Serialize)]
pub struct RoiArgs {
    /// Amount invested
    #[arg(short, long, value_parser = parse_amount)]
    pub invested: f64,

    /// Amount received back
    #[arg(short, long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub returned: f64,

    /// Holding period in years, for the annualized figure
    #[arg(short, long, default_value_t = 0.0)]
    pub years: f64,
}

pub fn handle_roi_command(ctx: &Context, args: RoiArgs) -> FincalcResult<()> {
    let result = calculate_roi(args.invested, args.returned, args.years);
    ctx.emit(CalculatorKind::Roi, "Return on Investment", &args, &result)
}

/// Rule of 72 arguments
#[derive(Args, Debug, Serialize)]
pub struct RuleOf72Args {
    /// Annual return in percent
    #[arg(short, long, value_parser = parse_percent)]
    pub rate: f64,
}

pub fn handle_rule_of_72_command(ctx: &Context, args: RuleOf72Args) -> FincalcResult<()> {
    let result = rule_of_72(args.rate);
    ctx.emit(CalculatorKind::RuleOf72, "Rule of 72", &args, &result)
}

/// Amount, per-period rate and period count for time value calculations
#[derive(Args, Debug, Serialize)]
pub struct TvmTerms {
    /// Interest rate per period in percent
    #[arg(short, long, value_parser = parse_percent)]
    pub rate: f64,

    /// Number of periods
    #[arg(short = 'n', long)]
    pub periods: u32,
}

/// Time value of money subcommands
#[derive(Subcommand, Debug)]
pub enum TvmCommands {
    /// Future value of a lump sum
    Fv {
        /// Present value
        #[arg(short, long, value_parser = parse_amount)]
        amount: f64,
        #[command(flatten)]
        terms: TvmTerms,
    },

    /// Present value of a future lump sum
    Pv {
        /// Future value
        #[arg(short, long, value_parser = parse_amount)]
        amount: f64,
        #[command(flatten)]
        terms: TvmTerms,
    },

    /// Future value of a series of equal end-of-period payments
    FvAnnuity {
        /// Payment per period
        #[arg(short, long, value_parser = parse_amount)]
        payment: f64,
        #[command(flatten)]
        terms: TvmTerms,
    },

    /// Present value of a series of equal end-of-period payments
    PvAnnuity {
        /// Payment per period
        #[arg(short, long, value_parser = parse_amount)]
        payment: f64,
        #[command(flatten)]
        terms: TvmTerms,
    },
}

/// Handle time value of money commands
pub fn handle_tvm_command(ctx: &Context, cmd: TvmCommands) -> FincalcResult<()> {
    let (label, amount, terms, value) = match cmd {
        TvmCommands::Fv { amount, terms } => {
            let value = future_value(amount, terms.rate, terms.periods);
            ("Future value", amount, terms, value)
        }
        TvmCommands::Pv { amount, terms } => {
            let value = present_value(amount, terms.rate, terms.periods);
            ("Present value", amount, terms, value)
        }
        TvmCommands::FvAnnuity { payment, terms } => {
            let value = future_value_of_annuity(payment, terms.rate, terms.periods);
            ("Future value of annuity", payment, terms, value)
        }
        TvmCommands::PvAnnuity { payment, terms } => {
            let value = present_value_of_annuity(payment, terms.rate, terms.periods);
            ("Present value of annuity", payment, terms, value)
        }
    };

    #[derive(Serialize)]
    struct Inputs {
        amount: f64,
        #[serde(flatten)]
        terms: TvmTerms,
    }

    let result = Figure::currency(label, value);
    ctx.emit(
        CalculatorKind::TimeValue,
        "Time Value of Money",
        &Inputs { amount, terms },
        &result,
    )
}

/// Inflation arguments
#[derive(Args, Debug, Serialize)]
pub struct InflationArgs {
    /// Amount in today's money
    #[arg(short, long, value_parser = parse_amount)]
    pub amount: f64,

    /// Annual inflation rate in percent
    #[arg(short, long, value_parser = parse_percent, default_value = "3")]
    pub rate: f64,

    /// Number of years
    #[arg(short, long)]
    pub years: f64,
}

pub fn handle_inflation_command(ctx: &Context, args: InflationArgs) -> FincalcResult<()> {
    let result = calculate_inflation(args.amount, args.rate, args.years);
    ctx.emit(CalculatorKind::Inflation, "Inflation", &args, &result)
}
