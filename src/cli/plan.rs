//! CLI commands for savings goals, emergency funds, retirement and FIRE

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::json;

use crate::error::FincalcResult;
use crate::finance::{
    calculate_emergency_fund, calculate_fire, calculate_retirement, calculate_savings_goal,
    months_to_goal, FireInput, RetirementInput,
};
use crate::history::CalculatorKind;
use crate::models::{parse_amount, parse_percent};
use crate::reports::ProjectionReport;

use super::context::Context;

/// Savings goal subcommands
#[derive(Subcommand, Debug)]
pub enum SavingsCommands {
    /// Monthly contribution needed to hit a target by a deadline
    Goal {
        /// Amount to reach
        #[arg(short, long, value_parser = parse_amount)]
        target: f64,

        /// Savings already set aside
        #[arg(short, long, value_parser = parse_amount, default_value = "0")]
        current: f64,

        /// Annual interest rate in percent
        #[arg(short, long, value_parser = parse_percent, default_value = "0")]
        rate: f64,

        /// Years until the deadline
        #[arg(short, long)]
        years: f64,
    },

    /// How long a fixed monthly contribution takes to reach a target
    Timeline {
        /// Amount to reach
        #[arg(short, long, value_parser = parse_amount)]
        target: f64,

        /// Savings already set aside
        #[arg(short, long, value_parser = parse_amount, default_value = "0")]
        current: f64,

        /// Amount saved each month
        #[arg(short, long, value_parser = parse_amount)]
        monthly: f64,

        /// Annual interest rate in percent
        #[arg(short, long, value_parser = parse_percent, default_value = "0")]
        rate: f64,
    },
}

/// Handle savings goal commands
pub fn handle_savings_command(ctx: &Context, cmd: SavingsCommands) -> FincalcResult<()> {
    match cmd {
        SavingsCommands::Goal {
            target,
            current,
            rate,
            years,
        } => {
            let result = calculate_savings_goal(target, current, rate, years);
            let inputs = json!({
                "target": target,
                "current": current,
                "rate": rate,
                "years": years,
            });
            ctx.emit(CalculatorKind::SavingsGoal, "Savings Goal", &inputs, &result)
        }
        SavingsCommands::Timeline {
            target,
            current,
            monthly,
            rate,
        } => {
            let result = months_to_goal(target, current, monthly, rate);
            let inputs = json!({
                "target": target,
                "current": current,
                "monthly": monthly,
                "rate": rate,
            });
            ctx.emit(CalculatorKind::SavingsGoal, "Savings Timeline", &inputs, &result)
        }
    }
}

/// Emergency fund arguments
#[derive(Args, Debug, Serialize)]
pub struct EmergencyFundArgs {
    /// Essential monthly expenses
    #[arg(short, long, value_parser = parse_amount)]
    pub expenses: f64,

    /// Months of expenses the fund should cover
    #[arg(short, long, default_value_t = 6.0)]
    pub months: f64,

    /// Cash already saved
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub current: f64,

    /// Amount added each month
    #[arg(short = 'a', long, value_parser = parse_amount, default_value = "0")]
    pub contribution: f64,
}

pub fn handle_emergency_fund_command(ctx: &Context, args: EmergencyFundArgs) -> FincalcResult<()> {
    let result =
        calculate_emergency_fund(args.expenses, args.months, args.current, args.contribution);
    ctx.emit(CalculatorKind::EmergencyFund, "Emergency Fund", &args, &result)
}

/// Retirement projection arguments
#[derive(Args, Debug)]
pub struct RetirementArgs {
    /// Age today
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// Age at retirement
    #[arg(long, default_value_t = 65)]
    pub retire_at: u32,

    /// Retirement savings today
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub savings: f64,

    /// Amount contributed each month
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub monthly: f64,

    /// Expected annual return in percent
    #[arg(short = 'r', long = "return", value_parser = parse_percent, default_value = "7")]
    pub annual_return: f64,

    /// Yearly raise applied to the monthly contribution, in percent
    #[arg(long, value_parser = parse_percent, default_value = "0")]
    pub increase: f64,

    /// Annual inflation in percent
    #[arg(short, long, value_parser = parse_percent, default_value = "3")]
    pub inflation: f64,

    /// Withdrawal rate in retirement, in percent (defaults to the configured rate)
    #[arg(short, long, value_parser = parse_percent)]
    pub withdrawal: Option<f64>,

    /// Export the year-by-year projection to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RetirementArgs {
    fn to_input(&self, default_withdrawal_rate: f64) -> RetirementInput {
        RetirementInput {
            current_age: self.age,
            retirement_age: self.retire_at,
            current_savings: self.savings,
            monthly_contribution: self.monthly,
            annual_return: self.annual_return,
            annual_contribution_increase: self.increase,
            inflation_rate: self.inflation,
            withdrawal_rate: self.withdrawal.unwrap_or(default_withdrawal_rate),
        }
    }
}

pub fn handle_retirement_command(ctx: &Context, args: RetirementArgs) -> FincalcResult<()> {
    let input = args.to_input(ctx.settings.default_withdrawal_rate);
    let result = calculate_retirement(&input);
    let report = ProjectionReport::from_retirement(&result);

    ctx.emit(CalculatorKind::Retirement, "Retirement Projection", &input, &result)?;

    if let Some(path) = &args.output {
        return ctx.write_csv(path, |w| report.export_csv(w));
    }

    ctx.emit_report(&report.format_terminal(ctx.symbol()));
    Ok(())
}

/// FIRE arguments
#[derive(Args, Debug)]
pub struct FireArgs {
    /// Annual spending in retirement
    #[arg(short, long, value_parser = parse_amount)]
    pub expenses: f64,

    /// Current invested net worth
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub net_worth: f64,

    /// Amount invested each year
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub savings: f64,

    /// Expected annual return in percent
    #[arg(short = 'r', long = "return", value_parser = parse_percent, default_value = "7")]
    pub annual_return: f64,

    /// Safe withdrawal rate in percent (defaults to the configured rate)
    #[arg(short, long, value_parser = parse_percent)]
    pub withdrawal: Option<f64>,

    /// Export the year-by-year projection to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_fire_command(ctx: &Context, args: FireArgs) -> FincalcResult<()> {
    let input = FireInput {
        annual_expenses: args.expenses,
        withdrawal_rate: args
            .withdrawal
            .unwrap_or(ctx.settings.default_withdrawal_rate),
        current_net_worth: args.net_worth,
        annual_savings: args.savings,
        annual_return: args.annual_return,
    };
    let result = calculate_fire(&input);
    let report = ProjectionReport::from_fire(&result);

    ctx.emit(CalculatorKind::Fire, "Financial Independence", &input, &result)?;

    if let Some(path) = &args.output {
        return ctx.write_csv(path, |w| report.export_csv(w));
    }

    ctx.emit_report(&report.format_terminal(ctx.symbol()));
    Ok(())
}
