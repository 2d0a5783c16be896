//! CLI commands for borrowing: loans, mortgages, auto loans and credit cards

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::error::FincalcResult;
use crate::finance::{
    calculate_auto_loan, calculate_credit_card_payoff, calculate_extra_payment_savings,
    calculate_loan_payment, calculate_mortgage, payment_for_payoff_months, AutoLoanInput,
    MortgageInput,
};
use crate::display::Figure;
use crate::history::CalculatorKind;
use crate::models::{parse_amount, parse_percent};
use crate::reports::AmortizationReport;

use super::context::Context;

/// Principal, rate and term shared by the loan subcommands
#[derive(Args, Debug, Clone, Serialize)]
pub struct LoanTerms {
    /// Amount borrowed
    #[arg(short, long, value_parser = parse_amount)]
    pub principal: f64,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = parse_percent)]
    pub rate: f64,

    /// Term in years (fractions allowed)
    #[arg(short, long)]
    pub years: f64,
}

/// Loan subcommands
#[derive(Subcommand, Debug)]
pub enum LoanCommands {
    /// Monthly payment and total interest
    Payment(LoanTerms),

    /// Full amortization schedule
    Schedule {
        #[command(flatten)]
        terms: LoanTerms,

        /// Show yearly totals instead of every month
        #[arg(long)]
        yearly: bool,

        /// Export the schedule to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Effect of paying extra every month
    Extra {
        #[command(flatten)]
        terms: LoanTerms,

        /// Extra amount paid each month
        #[arg(short, long, value_parser = parse_amount)]
        extra: f64,
    },
}

/// Handle loan commands
pub fn handle_loan_command(ctx: &Context, cmd: LoanCommands) -> FincalcResult<()> {
    match cmd {
        LoanCommands::Payment(terms) => {
            let result = calculate_loan_payment(terms.principal, terms.rate, terms.years);
            ctx.emit(CalculatorKind::Loan, "Loan Payment", &terms, &result)
        }
        LoanCommands::Schedule {
            terms,
            yearly,
            output,
        } => {
            let report = AmortizationReport::generate(terms.principal, terms.rate, terms.years);

            if let Some(path) = output {
                ctx.record(
                    CalculatorKind::Amortization,
                    &terms,
                    format!("{} payments exported", report.schedule.len()),
                )?;
                return ctx.write_csv(&path, |w| report.export_csv(w));
            }

            ctx.emit(
                CalculatorKind::Amortization,
                "Amortization",
                &terms,
                &report.payment,
            )?;
            ctx.emit_report(&report.format_terminal(ctx.symbol(), yearly));
            Ok(())
        }
        LoanCommands::Extra { terms, extra } => {
            let result =
                calculate_extra_payment_savings(terms.principal, terms.rate, terms.years, extra);

            #[derive(Serialize)]
            struct Inputs<'a> {
                #[serde(flatten)]
                terms: &'a LoanTerms,
                extra: f64,
            }

            ctx.emit(
                CalculatorKind::ExtraPayment,
                "Extra Payment Savings",
                &Inputs {
                    terms: &terms,
                    extra,
                },
                &result,
            )
        }
    }
}

/// Mortgage calculator arguments
#[derive(Args, Debug, Serialize)]
pub struct MortgageArgs {
    /// Purchase price of the home
    #[arg(long, value_parser = parse_amount)]
    pub price: f64,

    /// Down payment amount
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub down: f64,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = parse_percent)]
    pub rate: f64,

    /// Term in years
    #[arg(short, long, default_value_t = 30.0)]
    pub years: f64,

    /// Annual property tax
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub property_tax: f64,

    /// Annual homeowner's insurance
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub insurance: f64,

    /// Monthly HOA dues
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub hoa: f64,

    /// Annual PMI rate in percent of the loan, charged below 20% down
    #[arg(long, value_parser = parse_percent, default_value = "0.5")]
    pub pmi_rate: f64,
}

/// Handle the mortgage command
pub fn handle_mortgage_command(ctx: &Context, args: MortgageArgs) -> FincalcResult<()> {
    let input = MortgageInput {
        home_price: args.price,
        down_payment: args.down,
        annual_rate: args.rate,
        years: args.years,
        annual_property_tax: args.property_tax,
        annual_insurance: args.insurance,
        monthly_hoa: args.hoa,
        pmi_rate: args.pmi_rate,
    };
    let result = calculate_mortgage(&input);
    ctx.emit(CalculatorKind::Mortgage, "Mortgage Payment", &input, &result)
}

/// Auto loan calculator arguments
#[derive(Args, Debug, Serialize)]
pub struct AutoLoanArgs {
    /// Vehicle price
    #[arg(long, value_parser = parse_amount)]
    pub price: f64,

    /// Cash down payment
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub down: f64,

    /// Trade-in value
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub trade_in: f64,

    /// Sales tax rate in percent
    #[arg(long, value_parser = parse_percent, default_value = "0")]
    pub sales_tax: f64,

    /// Annual interest rate in percent
    #[arg(short, long, value_parser = parse_percent)]
    pub rate: f64,

    /// Term in months
    #[arg(short, long, default_value_t = 60)]
    pub months: u32,
}

/// Handle the auto loan command
pub fn handle_auto_loan_command(ctx: &Context, args: AutoLoanArgs) -> FincalcResult<()> {
    let input = AutoLoanInput {
        vehicle_price: args.price,
        down_payment: args.down,
        trade_in_value: args.trade_in,
        sales_tax_rate: args.sales_tax,
        annual_rate: args.rate,
        term_months: args.months,
    };
    let result = calculate_auto_loan(&input);
    ctx.emit(CalculatorKind::AutoLoan, "Auto Loan", &input, &result)
}

/// Credit card subcommands
#[derive(Subcommand, Debug)]
pub enum CreditCardCommands {
    /// How long a fixed monthly payment takes to clear the balance
    Payoff {
        /// Current balance
        #[arg(short, long, value_parser = parse_amount)]
        balance: f64,

        /// Annual percentage rate
        #[arg(short, long, value_parser = parse_percent)]
        apr: f64,

        /// Monthly payment
        #[arg(short, long, value_parser = parse_amount)]
        payment: f64,
    },

    /// Monthly payment needed to clear the balance in a given time
    Payment {
        /// Current balance
        #[arg(short, long, value_parser = parse_amount)]
        balance: f64,

        /// Annual percentage rate
        #[arg(short, long, value_parser = parse_percent)]
        apr: f64,

        /// Months to payoff
        #[arg(short, long)]
        months: u32,
    },
}

/// Handle credit card commands
pub fn handle_credit_card_command(ctx: &Context, cmd: CreditCardCommands) -> FincalcResult<()> {
    match cmd {
        CreditCardCommands::Payoff {
            balance,
            apr,
            payment,
        } => {
            let result = calculate_credit_card_payoff(balance, apr, payment);
            let inputs = serde_json::json!({"balance": balance, "apr": apr, "payment": payment});
            ctx.emit(CalculatorKind::CreditCard, "Credit Card Payoff", &inputs, &result)
        }
        CreditCardCommands::Payment {
            balance,
            apr,
            months,
        } => {
            let result = Figure::currency(
                "Required monthly payment",
                payment_for_payoff_months(balance, apr, months),
            );
            let inputs = serde_json::json!({"balance": balance, "apr": apr, "months": months});
            ctx.emit(CalculatorKind::CreditCard, "Credit Card Payment", &inputs, &result)
        }
    }
}
