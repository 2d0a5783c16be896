//! Auto loan with trade-in and sales tax

use serde::{Deserialize, Serialize};

use super::{amortized_payment, monthly_rate, non_negative};

/// Inputs to the auto loan calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLoanInput {
    pub vehicle_price: f64,
    pub down_payment: f64,
    pub trade_in_value: f64,
    /// Sales tax, percent of the taxable price
    pub sales_tax_rate: f64,
    /// Annual interest rate, percent
    pub annual_rate: f64,
    pub term_months: u32,
}

/// Result of the auto loan calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLoanResult {
    pub sales_tax: f64,
    pub amount_financed: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    /// Everything paid for the vehicle: down payment, trade-in and all installments
    pub total_cost: f64,
}

/// Calculate financing for a vehicle purchase
///
/// Sales tax is charged on the price net of the trade-in.
pub fn calculate_auto_loan(input: &AutoLoanInput) -> AutoLoanResult {
    let price = non_negative(input.vehicle_price);
    let down_payment = non_negative(input.down_payment);
    let trade_in = non_negative(input.trade_in_value);

    let taxable = (price - trade_in).max(0.0);
    let sales_tax = taxable * non_negative(input.sales_tax_rate) / 100.0;
    let amount_financed = (price + sales_tax - down_payment - trade_in).max(0.0);

    let monthly_payment = amortized_payment(
        amount_financed,
        monthly_rate(input.annual_rate),
        input.term_months,
    );
    let total_payments = monthly_payment * input.term_months as f64;
    let total_interest = if input.term_months == 0 {
        0.0
    } else {
        total_payments - amount_financed
    };

    AutoLoanResult {
        sales_tax,
        amount_financed,
        monthly_payment,
        total_interest,
        total_cost: down_payment + trade_in + total_payments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car() -> AutoLoanInput {
        AutoLoanInput {
            vehicle_price: 30_000.0,
            down_payment: 3_000.0,
            trade_in_value: 5_000.0,
            sales_tax_rate: 8.0,
            annual_rate: 6.0,
            term_months: 60,
        }
    }

    #[test]
    fn test_tax_on_price_net_of_trade_in() {
        let result = calculate_auto_loan(&car());
        assert!((result.sales_tax - 2_000.0).abs() < 1e-9);
        assert!((result.amount_financed - 24_000.0).abs() < 1e-9);
        assert!((result.monthly_payment - 463.99).abs() < 0.01);
        assert!(result.total_interest > 0.0);
    }

    #[test]
    fn test_cash_purchase() {
        let input = AutoLoanInput {
            down_payment: 40_000.0,
            ..car()
        };
        let result = calculate_auto_loan(&input);
        assert_eq!(result.amount_financed, 0.0);
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_zero_term() {
        let input = AutoLoanInput {
            term_months: 0,
            ..car()
        };
        let result = calculate_auto_loan(&input);
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_interest, 0.0);
    }
}
