//! CLI commands for budgets, pay, taxes and personal balance sheets

use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::json;

use crate::error::{FincalcError, FincalcResult};
use crate::finance::{
    analyze_budget, calculate_budget_rule, calculate_debt_to_income, calculate_income_tax,
    calculate_net_worth, convert_salary, BudgetCategory, BudgetRule, Expense, FilingStatus,
    LineItem, PayFrequency,
};
use crate::history::CalculatorKind;
use crate::models::{parse_amount, parse_percent};

use super::context::Context;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Split income by a needs/wants/savings rule (50/30/20 unless overridden)
    Rule {
        /// Monthly take-home income
        #[arg(short, long, value_parser = parse_amount)]
        income: f64,

        /// Share for needs, in percent
        #[arg(long, value_parser = parse_percent, default_value = "50")]
        needs: f64,

        /// Share for wants, in percent
        #[arg(long, value_parser = parse_percent, default_value = "30")]
        wants: f64,

        /// Share for savings, in percent
        #[arg(long, value_parser = parse_percent, default_value = "20")]
        savings: f64,
    },

    /// Break actual expenses down by category
    Analyze {
        /// Monthly take-home income
        #[arg(short, long, value_parser = parse_amount)]
        income: f64,

        /// An expense as name:amount:category (repeatable)
        #[arg(short, long = "expense", value_name = "SPEC")]
        expenses: Vec<String>,
    },
}

/// Parse a `name:amount:category` expense
fn parse_expense(spec: &str) -> FincalcResult<Expense> {
    let mut parts = spec.rsplitn(3, ':');
    let (Some(category), Some(amount), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FincalcError::invalid_argument(
            "expense",
            spec,
            "name:amount:category",
        ));
    };

    let amount = parse_amount(amount)
        .map_err(|_| FincalcError::invalid_argument("expense amount", amount, "an amount"))?;
    let category = category.parse::<BudgetCategory>().map_err(|_| {
        FincalcError::invalid_argument("expense category", category, "needs, wants or savings")
    })?;

    Ok(Expense {
        name: name.trim().to_string(),
        amount,
        category,
    })
}

/// Parse a `name:amount` balance sheet line
fn parse_line_item(spec: &str) -> FincalcResult<LineItem> {
    let Some((name, amount)) = spec.rsplit_once(':') else {
        return Err(FincalcError::invalid_argument("item", spec, "name:amount"));
    };
    let amount = parse_amount(amount)
        .map_err(|_| FincalcError::invalid_argument("item amount", amount, "an amount"))?;
    Ok(LineItem::new(name.trim(), amount))
}

/// Handle budget commands
pub fn handle_budget_command(ctx: &Context, cmd: BudgetCommands) -> FincalcResult<()> {
    match cmd {
        BudgetCommands::Rule {
            income,
            needs,
            wants,
            savings,
        } => {
            let total = needs + wants + savings;
            if (total - 100.0).abs() > 0.01 {
                return Err(FincalcError::Validation(format!(
                    "Budget shares must add up to 100% (got {:.2}%)",
                    total
                )));
            }

            let rule = BudgetRule {
                needs_percent: needs,
                wants_percent: wants,
                savings_percent: savings,
            };
            let result = calculate_budget_rule(income, &rule);
            let inputs = json!({ "income": income, "rule": rule });
            ctx.emit(CalculatorKind::Budget, "Budget Rule", &inputs, &result)
        }
        BudgetCommands::Analyze { income, expenses } => {
            let expenses = expenses
                .iter()
                .map(|spec| parse_expense(spec))
                .collect::<FincalcResult<Vec<_>>>()?;
            let result = analyze_budget(income, &expenses);
            let inputs = json!({ "income": income, "expenses": expenses });
            ctx.emit(CalculatorKind::Budget, "Budget Analysis", &inputs, &result)
        }
    }
}

/// Salary conversion arguments
#[derive(Args, Debug, Serialize)]
pub struct SalaryArgs {
    /// Pay amount
    #[arg(value_parser = parse_amount)]
    pub amount: f64,

    /// How often the amount is paid (hourly, weekly, bi-weekly, semi-monthly, monthly, annually)
    #[arg(short, long, default_value = "annually")]
    pub per: PayFrequency,

    /// Hours worked per week (defaults to the configured value)
    #[arg(long)]
    pub hours: Option<f64>,
}

pub fn handle_salary_command(ctx: &Context, mut args: SalaryArgs) -> FincalcResult<()> {
    let hours = *args.hours.get_or_insert(ctx.settings.hours_per_week);
    let result = convert_salary(args.amount, args.per, hours);
    ctx.emit(CalculatorKind::Salary, "Salary Conversion", &args, &result)
}

/// Income tax arguments
#[derive(Args, Debug, Serialize)]
pub struct TaxArgs {
    /// Gross annual income
    #[arg(value_parser = parse_amount)]
    pub income: f64,

    /// Filing status: single, mfj, mfs or hoh (defaults to the configured status)
    #[arg(short, long)]
    pub status: Option<FilingStatus>,

    /// Itemized deduction instead of the standard deduction
    #[arg(short, long, value_parser = parse_amount)]
    pub deduction: Option<f64>,
}

pub fn handle_tax_command(ctx: &Context, mut args: TaxArgs) -> FincalcResult<()> {
    let status = *args.status.get_or_insert(ctx.settings.filing_status);
    let result = calculate_income_tax(args.income, status, args.deduction);
    ctx.emit(CalculatorKind::IncomeTax, "Federal Income Tax", &args, &result)
}

/// Net worth arguments
#[derive(Args, Debug)]
pub struct NetWorthArgs {
    /// An asset as name:amount (repeatable)
    #[arg(short, long = "asset", value_name = "SPEC")]
    pub assets: Vec<String>,

    /// A liability as name:amount (repeatable)
    #[arg(short, long = "liability", value_name = "SPEC")]
    pub liabilities: Vec<String>,
}

pub fn handle_net_worth_command(ctx: &Context, args: NetWorthArgs) -> FincalcResult<()> {
    let assets = args
        .assets
        .iter()
        .map(|spec| parse_line_item(spec))
        .collect::<FincalcResult<Vec<_>>>()?;
    let liabilities = args
        .liabilities
        .iter()
        .map(|spec| parse_line_item(spec))
        .collect::<FincalcResult<Vec<_>>>()?;

    let result = calculate_net_worth(&assets, &liabilities);
    let inputs = json!({ "assets": assets, "liabilities": liabilities });
    ctx.emit(CalculatorKind::NetWorth, "Net Worth", &inputs, &result)
}

/// Debt-to-income arguments
#[derive(Args, Debug, Serialize)]
pub struct DtiArgs {
    /// Total monthly debt payments
    #[arg(short, long, value_parser = parse_amount)]
    pub debts: f64,

    /// Gross monthly income
    #[arg(short, long, value_parser = parse_amount)]
    pub income: f64,
}

pub fn handle_dti_command(ctx: &Context, args: DtiArgs) -> FincalcResult<()> {
    let result = calculate_debt_to_income(args.debts, args.income);
    ctx.emit(CalculatorKind::DebtToIncome, "Debt-to-Income", &args, &result)
}
