//! Fixed-rate installment loans
//!
//! Level monthly payment, full amortization schedule, and the effect of paying
//! a fixed extra amount each month.

use serde::{Deserialize, Serialize};

use super::{amortized_payment, monthly_rate, non_negative, years_to_months, BALANCE_EPSILON};

/// Payment summary for a fixed-rate loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub total_principal: f64,
}

/// One row of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based payment number
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// Balance remaining after this payment
    pub balance: f64,
}

/// Outcome of adding a fixed extra amount to every payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPaymentResult {
    pub original_months: u32,
    pub payoff_months: u32,
    pub months_saved: u32,
    pub original_interest: f64,
    pub total_interest: f64,
    pub interest_saved: f64,
}

/// Calculate the level monthly payment for a loan
///
/// ```
/// use fincalc::finance::calculate_loan_payment;
///
/// let loan = calculate_loan_payment(25_000.0, 6.0, 5.0);
/// assert!((loan.monthly_payment - 483.32).abs() < 0.01);
/// ```
pub fn calculate_loan_payment(principal: f64, annual_rate: f64, years: f64) -> LoanPayment {
    let principal = non_negative(principal);
    let months = years_to_months(years);

    if months == 0 || principal == 0.0 {
        return LoanPayment {
            monthly_payment: 0.0,
            total_payment: 0.0,
            total_interest: 0.0,
            total_principal: 0.0,
        };
    }

    let monthly_payment = amortized_payment(principal, monthly_rate(annual_rate), months);
    let total_payment = monthly_payment * months as f64;

    LoanPayment {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
        total_principal: principal,
    }
}

/// Build the month-by-month amortization schedule for a loan
///
/// The final payment absorbs floating-point drift so the last balance is
/// exactly zero and the principal column sums to the loan amount.
pub fn generate_amortization_schedule(
    principal: f64,
    annual_rate: f64,
    years: f64,
) -> Vec<AmortizationEntry> {
    let principal = non_negative(principal);
    let months = years_to_months(years);
    let rate = monthly_rate(annual_rate);
    let payment = amortized_payment(principal, rate, months);

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        if balance <= 0.0 {
            break;
        }

        let interest = balance * rate;
        let mut principal_part = payment - interest;

        if month == months || principal_part >= balance {
            principal_part = balance;
        }

        balance -= principal_part;
        if month == months || balance < BALANCE_EPSILON {
            balance = 0.0;
        }

        schedule.push(AmortizationEntry {
            month,
            payment: principal_part + interest,
            principal: principal_part,
            interest,
            balance,
        });
    }

    schedule
}

/// Compare the standard schedule against one with `extra_monthly` added to each payment
///
/// The payment never drops below the level payment, so the simulation ends
/// within the original term.
pub fn calculate_extra_payment_savings(
    principal: f64,
    annual_rate: f64,
    years: f64,
    extra_monthly: f64,
) -> ExtraPaymentResult {
    let principal = non_negative(principal);
    let extra_monthly = non_negative(extra_monthly);
    let original_months = years_to_months(years);
    let original = calculate_loan_payment(principal, annual_rate, years);
    let rate = monthly_rate(annual_rate);
    let payment = original.monthly_payment + extra_monthly;

    let mut balance = principal;
    let mut total_interest = 0.0;
    let mut payoff_months = 0;

    while balance >= BALANCE_EPSILON && payoff_months < original_months {
        payoff_months += 1;
        let interest = balance * rate;
        total_interest += interest;
        balance = (balance + interest - payment).max(0.0);
    }

    ExtraPaymentResult {
        original_months,
        payoff_months,
        months_saved: original_months.saturating_sub(payoff_months),
        original_interest: original.total_interest,
        total_interest,
        interest_saved: original.total_interest - total_interest,
    }
}
