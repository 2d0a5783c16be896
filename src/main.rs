use anyhow::Result;
use clap::{Parser, Subcommand};

use fincalc::cli::{self, Context};
use fincalc::config::{FincalcPaths, OutputFormat, Settings};

#[derive(Parser)]
#[command(
    name = "fincalc",
    author = "Kaylee Beyene",
    version,
    about = "Terminal financial calculators",
    long_about = "fincalc answers everyday money questions from the command line: \
                  loan and mortgage payments, interest growth, savings goals, debt \
                  payoff strategies, retirement and FIRE projections, budgets and \
                  federal income tax."
)]
struct Cli {
    /// Output format (overrides the configured default)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Loan payments, amortization schedules and extra payments
    #[command(subcommand)]
    Loan(cli::LoanCommands),

    /// Monthly mortgage cost including taxes, insurance, PMI and HOA
    Mortgage(cli::MortgageArgs),

    /// Auto loan with trade-in and sales tax
    AutoLoan(cli::AutoLoanArgs),

    /// Credit card payoff time and required payments
    #[command(subcommand, alias = "cc")]
    CreditCard(cli::CreditCardCommands),

    /// Compound interest with monthly contributions
    Compound(cli::CompoundArgs),

    /// Simple interest
    SimpleInterest(cli::SimpleInterestArgs),

    /// Compound annual growth rate
    Cagr(cli::CagrArgs),

    /// Return on investment
    Roi(cli::RoiArgs),

    /// Years to double money at a given return
    #[command(name = "rule-of-72")]
    RuleOf72(cli::RuleOf72Args),

    /// Present and future values of lump sums and annuities
    #[command(subcommand)]
    Tvm(cli::TvmCommands),

    /// Future cost and purchasing power under inflation
    Inflation(cli::InflationArgs),

    /// Savings goals and timelines
    #[command(subcommand)]
    Savings(cli::SavingsCommands),

    /// Emergency fund target and progress
    EmergencyFund(cli::EmergencyFundArgs),

    /// Retirement savings projection
    Retirement(cli::RetirementArgs),

    /// Financial independence number and timeline
    Fire(cli::FireArgs),

    /// Debt payoff plans (snowball and avalanche)
    #[command(subcommand)]
    Debt(cli::DebtCommands),

    /// Budget rules and expense analysis
    #[command(subcommand)]
    Budget(cli::BudgetCommands),

    /// Convert pay between hourly, weekly, monthly and annual
    Salary(cli::SalaryArgs),

    /// Federal income tax estimate
    Tax(cli::TaxArgs),

    /// Net worth from assets and liabilities
    NetWorth(cli::NetWorthArgs),

    /// Debt-to-income ratio
    Dti(cli::DtiArgs),

    /// Calculation history
    #[command(subcommand)]
    History(cli::HistoryCommands),

    /// Create the config directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FincalcPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = Context::new(paths, settings, cli.format);

    match cli.command {
        Some(Commands::Loan(cmd)) => cli::handle_loan_command(&ctx, cmd)?,
        Some(Commands::Mortgage(args)) => cli::handle_mortgage_command(&ctx, args)?,
        Some(Commands::AutoLoan(args)) => cli::handle_auto_loan_command(&ctx, args)?,
        Some(Commands::CreditCard(cmd)) => cli::handle_credit_card_command(&ctx, cmd)?,
        Some(Commands::Compound(args)) => cli::handle_compound_command(&ctx, args)?,
        Some(Commands::SimpleInterest(args)) => cli::handle_simple_interest_command(&ctx, args)?,
        Some(Commands::Cagr(args)) => cli::handle_cagr_command(&ctx, args)?,
        Some(Commands::Roi(args)) => cli::handle_roi_command(&ctx, args)?,
        Some(Commands::RuleOf72(args)) => cli::handle_rule_of_72_command(&ctx, args)?,
        Some(Commands::Tvm(cmd)) => cli::handle_tvm_command(&ctx, cmd)?,
        Some(Commands::Inflation(args)) => cli::handle_inflation_command(&ctx, args)?,
        Some(Commands::Savings(cmd)) => cli::handle_savings_command(&ctx, cmd)?,
        Some(Commands::EmergencyFund(args)) => cli::handle_emergency_fund_command(&ctx, args)?,
        Some(Commands::Retirement(args)) => cli::handle_retirement_command(&ctx, args)?,
        Some(Commands::Fire(args)) => cli::handle_fire_command(&ctx, args)?,
        Some(Commands::Debt(cmd)) => cli::handle_debt_command(&ctx, cmd)?,
        Some(Commands::Budget(cmd)) => cli::handle_budget_command(&ctx, cmd)?,
        Some(Commands::Salary(args)) => cli::handle_salary_command(&ctx, args)?,
        Some(Commands::Tax(args)) => cli::handle_tax_command(&ctx, args)?,
        Some(Commands::NetWorth(args)) => cli::handle_net_worth_command(&ctx, args)?,
        Some(Commands::Dti(args)) => cli::handle_dti_command(&ctx, args)?,
        Some(Commands::History(cmd)) => cli::handle_history_command(&ctx, cmd)?,
        Some(Commands::Init) => {
            if ctx.paths.is_initialized() {
                println!("fincalc is already initialized at: {}", ctx.paths.base_dir().display());
                return Ok(());
            }
            println!("Initializing fincalc at: {}", ctx.paths.base_dir().display());
            ctx.paths.ensure_directories()?;
            ctx.settings.save(&ctx.paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", ctx.paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let settings = &ctx.settings;
            println!("fincalc Configuration");
            println!("=====================");
            println!("Base directory:   {}", ctx.paths.base_dir().display());
            println!("Settings file:    {}", ctx.paths.settings_file().display());
            println!("History log:      {}", ctx.paths.history_log().display());
            println!("Exports directory: {}", ctx.paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Output format:       {:?}", settings.output_format);
            println!("  Record history:      {}", settings.record_history);
            println!("  Compounding:         {}", settings.default_compounding);
            println!("  Withdrawal rate:     {}%", settings.default_withdrawal_rate);
            println!("  Hours per week:      {}", settings.hours_per_week);
            println!("  Filing status:       {}", settings.filing_status);
            println!("  Date format:         {}", settings.date_format);
        }
        None => {
            println!("fincalc - Terminal financial calculators");
            println!();
            println!("Run 'fincalc --help' for usage information.");
        }
    }

    Ok(())
}
