//! Financial calculation core
//!
//! Every calculator in this module is a pure function: numeric inputs in, a
//! freshly built result record out. Nothing here returns an error or panics.
//! Degenerate inputs (zero rates, zero terms, goals already met) are handled
//! algebraically, and every iterative simulation is bounded by
//! [`MAX_PAYOFF_MONTHS`] or [`MAX_PROJECTION_YEARS`].
//!
//! Rates are percentages throughout (`6.0` means 6%).

pub mod auto_loan;
pub mod budget;
pub mod compound;
pub mod credit_card;
pub mod debt;
pub mod emergency_fund;
pub mod fire;
pub mod inflation;
pub mod investment;
pub mod loan;
pub mod mortgage;
pub mod net_worth;
pub mod ratios;
pub mod retirement;
pub mod salary;
pub mod savings;
pub mod tax;
pub mod time_value;

pub use auto_loan::{calculate_auto_loan, AutoLoanInput, AutoLoanResult};
pub use budget::{
    analyze_budget, calculate_budget_rule, BudgetAllocation, BudgetAnalysis, BudgetCategory,
    BudgetRule, CategoryTotal, Expense,
};
pub use compound::{
    calculate_compound_interest, calculate_simple_interest, CompoundInterestResult,
    CompoundingFrequency, SimpleInterestResult, YearlyBalance,
};
pub use credit_card::{calculate_credit_card_payoff, payment_for_payoff_months, CreditCardPayoff};
pub use debt::{
    calculate_debt_avalanche, calculate_debt_snowball, compare_strategies, Debt,
    DebtPayoffPlan, DebtPayoffSummary, MonthlyProgress, PayoffStrategy, StrategyComparison,
};
pub use emergency_fund::{calculate_emergency_fund, EmergencyFundResult};
pub use fire::{calculate_fire, FireInput, FireResult, FireYear};
pub use inflation::{calculate_inflation, InflationResult};
pub use investment::{calculate_cagr, calculate_roi, rule_of_72, RoiResult, RuleOf72Result};
pub use loan::{
    calculate_extra_payment_savings, calculate_loan_payment, generate_amortization_schedule,
    AmortizationEntry, ExtraPaymentResult, LoanPayment,
};
pub use mortgage::{calculate_mortgage, MortgageInput, MortgagePayment};
pub use net_worth::{calculate_net_worth, LineItem, NetWorthResult};
pub use ratios::{calculate_debt_to_income, DebtToIncome, DtiRating};
pub use retirement::{calculate_retirement, RetirementInput, RetirementProjection, RetirementYear};
pub use salary::{convert_salary, PayFrequency, SalaryBreakdown};
pub use savings::{calculate_savings_goal, months_to_goal, GoalTimeline, SavingsGoalResult};
pub use tax::{
    calculate_income_tax, calculate_tax_from_brackets, federal_brackets, standard_deduction,
    BracketTax, FilingStatus, TaxBracket, TaxResult,
};
pub use time_value::{
    future_value, future_value_of_annuity, present_value, present_value_of_annuity,
};

/// Upper bound on any month-by-month simulation (50 years)
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Upper bound on any year-by-year projection
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Balances below half a cent count as paid off
pub(crate) const BALANCE_EPSILON: f64 = 0.005;

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / 100.0 / 12.0
}

/// Level payment that retires `principal` over `periods` at `periodic_rate`
///
/// `periodic_rate` is a decimal rate per period. A zero rate degenerates to
/// straight-line division, and a zero term owes nothing per period.
pub fn amortized_payment(principal: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periods == 0 || principal <= 0.0 {
        return 0.0;
    }
    if periodic_rate == 0.0 {
        return principal / periods as f64;
    }

    let exponent = i32::try_from(periods).unwrap_or(i32::MAX);
    let growth = (1.0 + periodic_rate).powi(exponent);
    if !growth.is_finite() {
        // Limit of the formula as growth goes to infinity: interest only
        return principal * periodic_rate;
    }
    principal * periodic_rate * growth / (growth - 1.0)
}

/// Longest loan or savings term, in months
pub const MAX_TERM_MONTHS: u32 = MAX_PROJECTION_YEARS * 12;

/// Convert a (possibly fractional) number of years to whole months
///
/// Terms longer than [`MAX_PROJECTION_YEARS`] are clamped.
pub(crate) fn years_to_months(years: f64) -> u32 {
    if years.is_finite() && years > 0.0 {
        (years * 12.0).round().min(MAX_TERM_MONTHS as f64) as u32
    } else {
        0
    }
}

/// Clamp negative or non-finite values to zero
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        assert!((monthly_rate(12.0) - 0.01).abs() < 1e-12);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_amortized_payment_zero_rate() {
        assert_eq!(amortized_payment(1200.0, 0.0, 12), 100.0);
    }

    #[test]
    fn test_amortized_payment_zero_term() {
        assert_eq!(amortized_payment(1200.0, 0.01, 0), 0.0);
    }

    #[test]
    fn test_amortized_payment_formula() {
        // 25,000 at 6% over 60 months
        let payment = amortized_payment(25_000.0, monthly_rate(6.0), 60);
        assert!((payment - 483.32).abs() < 0.01);
    }

    #[test]
    fn test_years_to_months() {
        assert_eq!(years_to_months(5.0), 60);
        assert_eq!(years_to_months(2.5), 30);
        assert_eq!(years_to_months(-1.0), 0);
        assert_eq!(years_to_months(f64::NAN), 0);
        assert_eq!(years_to_months(20_000.0), MAX_TERM_MONTHS);
        assert_eq!(years_to_months(f64::MAX), MAX_TERM_MONTHS);
    }

    #[test]
    fn test_amortized_payment_overflowing_growth() {
        // (1 + 10)^1200 overflows f64
        let payment = amortized_payment(1_000.0, 10.0, MAX_TERM_MONTHS);
        assert!(payment.is_finite());
        assert_eq!(payment, 10_000.0);

        // Terms past i32::MAX must not wrap to a negative exponent
        let payment = amortized_payment(1_000.0, 0.005, u32::MAX);
        assert!((payment - 5.0).abs() < 1e-9);
    }
}
