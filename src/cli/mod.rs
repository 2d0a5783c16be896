//! CLI command handlers
//!
//! Bridges clap argument parsing with the calculators in [`crate::finance`].
//! Each handler turns parsed arguments into calculator inputs, runs the
//! calculation, and hands the result to [`Context`] for recording and output.

pub mod budget;
pub mod context;
pub mod debt;
pub mod history;
pub mod invest;
pub mod loan;
pub mod plan;

pub use budget::{
    handle_budget_command, handle_dti_command, handle_net_worth_command, handle_salary_command,
    handle_tax_command, BudgetCommands, DtiArgs, NetWorthArgs, SalaryArgs, TaxArgs,
};
pub use context::Context;
pub use debt::{handle_debt_command, DebtCommands, DebtListArgs};
pub use history::{handle_history_command, HistoryCommands};
pub use invest::{
    handle_cagr_command, handle_compound_command, handle_inflation_command, handle_roi_command,
    handle_rule_of_72_command, handle_simple_interest_command, handle_tvm_command, CagrArgs,
    CompoundArgs, InflationArgs, RoiArgs, RuleOf72Args, SimpleInterestArgs, TvmCommands,
};
pub use loan::{
    handle_auto_loan_command, handle_credit_card_command, handle_loan_command,
    handle_mortgage_command, AutoLoanArgs, CreditCardCommands, LoanCommands, MortgageArgs,
};
pub use plan::{
    handle_emergency_fund_command, handle_fire_command, handle_retirement_command,
    handle_savings_command, EmergencyFundArgs, FireArgs, RetirementArgs, SavingsCommands,
};
