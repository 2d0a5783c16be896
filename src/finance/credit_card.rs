//! Credit card payoff at a fixed monthly payment

use serde::{Deserialize, Serialize};

use super::{amortized_payment, monthly_rate, non_negative, BALANCE_EPSILON, MAX_PAYOFF_MONTHS};

/// Result of paying a fixed amount against a card balance each month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCardPayoff {
    pub months: u32,
    pub total_interest: f64,
    pub total_paid: f64,
    /// False when the payment cannot clear the balance within the simulation cap
    pub paid_off: bool,
}

/// Simulate paying `monthly_payment` against `balance` until it is cleared
///
/// Interest accrues monthly at `apr / 12`. The simulation stops at
/// [`MAX_PAYOFF_MONTHS`].
pub fn calculate_credit_card_payoff(balance: f64, apr: f64, monthly_payment: f64) -> CreditCardPayoff {
    let rate = monthly_rate(apr);
    let payment = non_negative(monthly_payment);
    let mut balance = non_negative(balance);

    let mut months = 0;
    let mut total_interest = 0.0;
    let mut total_paid = 0.0;

    while balance >= BALANCE_EPSILON && months < MAX_PAYOFF_MONTHS {
        months += 1;

        let interest = balance * rate;
        total_interest += interest;
        balance += interest;

        let paid = payment.min(balance);
        total_paid += paid;
        balance -= paid;
    }

    CreditCardPayoff {
        months,
        total_interest,
        total_paid,
        paid_off: balance < BALANCE_EPSILON,
    }
}

/// Monthly payment needed to clear `balance` in exactly `months`
pub fn payment_for_payoff_months(balance: f64, apr: f64, months: u32) -> f64 {
    amortized_payment(non_negative(balance), monthly_rate(apr), months)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff() {
        let result = calculate_credit_card_payoff(5_000.0, 18.0, 200.0);
        assert!(result.paid_off);
        assert_eq!(result.months, 32);
        assert!(result.total_interest > 1_000.0 && result.total_interest < 1_500.0);
        assert!((result.total_paid - (5_000.0 + result.total_interest)).abs() < 1e-6);
    }

    #[test]
    fn test_payment_below_interest_never_pays_off() {
        // 1.5% of 10,000 is 150 a month in interest
        let result = calculate_credit_card_payoff(10_000.0, 18.0, 100.0);
        assert!(!result.paid_off);
        assert_eq!(result.months, MAX_PAYOFF_MONTHS);
    }

    #[test]
    fn test_zero_balance() {
        let result = calculate_credit_card_payoff(0.0, 18.0, 100.0);
        assert!(result.paid_off);
        assert_eq!(result.months, 0);
        assert_eq!(result.total_paid, 0.0);
    }

    #[test]
    fn test_payment_for_months_round_trips() {
        let payment = payment_for_payoff_months(5_000.0, 18.0, 24);
        let result = calculate_credit_card_payoff(5_000.0, 18.0, payment + 0.01);
        assert!(result.paid_off);
        assert_eq!(result.months, 24);
    }
}
