//! Mortgage payment with escrow items

use serde::{Deserialize, Serialize};

use super::loan::calculate_loan_payment;
use super::non_negative;

/// Down payment share below which private mortgage insurance applies
const PMI_THRESHOLD_PERCENT: f64 = 20.0;

/// Inputs to the mortgage calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInput {
    pub home_price: f64,
    pub down_payment: f64,
    /// Annual interest rate, percent
    pub annual_rate: f64,
    pub years: f64,
    pub annual_property_tax: f64,
    pub annual_insurance: f64,
    pub monthly_hoa: f64,
    /// Annual PMI rate as a percent of the loan amount
    pub pmi_rate: f64,
}

impl Default for MortgageInput {
    fn default() -> Self {
        Self {
            home_price: 0.0,
            down_payment: 0.0,
            annual_rate: 0.0,
            years: 30.0,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
            monthly_hoa: 0.0,
            pmi_rate: 0.5,
        }
    }
}

/// Monthly mortgage cost broken into its components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgagePayment {
    pub loan_amount: f64,
    pub down_payment_percent: f64,
    pub principal_and_interest: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_pmi: f64,
    pub monthly_hoa: f64,
    pub total_monthly_payment: f64,
    /// Interest paid over the full term
    pub total_interest: f64,
    /// Down payment plus every principal and interest payment
    pub total_cost: f64,
}

/// Calculate the full monthly housing payment for a mortgage
pub fn calculate_mortgage(input: &MortgageInput) -> MortgagePayment {
    let home_price = non_negative(input.home_price);
    let down_payment = non_negative(input.down_payment).min(home_price);
    let loan_amount = home_price - down_payment;

    let down_payment_percent = if home_price > 0.0 {
        down_payment * 100.0 / home_price
    } else {
        0.0
    };

    let loan = calculate_loan_payment(loan_amount, input.annual_rate, input.years);

    let monthly_pmi = if loan_amount > 0.0 && down_payment_percent < PMI_THRESHOLD_PERCENT {
        loan_amount * non_negative(input.pmi_rate) / 100.0 / 12.0
    } else {
        0.0
    };

    let monthly_property_tax = non_negative(input.annual_property_tax) / 12.0;
    let monthly_insurance = non_negative(input.annual_insurance) / 12.0;
    let monthly_hoa = non_negative(input.monthly_hoa);

    MortgagePayment {
        loan_amount,
        down_payment_percent,
        principal_and_interest: loan.monthly_payment,
        monthly_property_tax,
        monthly_insurance,
        monthly_pmi,
        monthly_hoa,
        total_monthly_payment: loan.monthly_payment
            + monthly_property_tax
            + monthly_insurance
            + monthly_pmi
            + monthly_hoa,
        total_interest: loan.total_interest,
        total_cost: down_payment + loan.total_payment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house() -> MortgageInput {
        MortgageInput {
            home_price: 400_000.0,
            down_payment: 80_000.0,
            annual_rate: 7.0,
            years: 30.0,
            annual_property_tax: 4_800.0,
            annual_insurance: 1_200.0,
            monthly_hoa: 50.0,
            pmi_rate: 0.5,
        }
    }

    #[test]
    fn test_twenty_percent_down_has_no_pmi() {
        let result = calculate_mortgage(&house());
        assert_eq!(result.loan_amount, 320_000.0);
        assert_eq!(result.down_payment_percent, 20.0);
        assert_eq!(result.monthly_pmi, 0.0);
        assert!((result.principal_and_interest - 2_128.97).abs() < 0.01);
        assert_eq!(result.monthly_property_tax, 400.0);
        assert_eq!(result.monthly_insurance, 100.0);

        let expected_total = result.principal_and_interest + 400.0 + 100.0 + 50.0;
        assert!((result.total_monthly_payment - expected_total).abs() < 1e-9);
    }

    #[test]
    fn test_small_down_payment_adds_pmi() {
        let input = MortgageInput {
            down_payment: 40_000.0,
            ..house()
        };
        let result = calculate_mortgage(&input);
        assert_eq!(result.loan_amount, 360_000.0);
        assert!((result.monthly_pmi - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_down_payment_exceeding_price() {
        let input = MortgageInput {
            down_payment: 500_000.0,
            ..house()
        };
        let result = calculate_mortgage(&input);
        assert_eq!(result.loan_amount, 0.0);
        assert_eq!(result.principal_and_interest, 0.0);
        assert_eq!(result.monthly_pmi, 0.0);
        assert_eq!(result.total_cost, 400_000.0);
    }

    #[test]
    fn test_all_zero_input() {
        let result = calculate_mortgage(&MortgageInput::default());
        assert_eq!(result.total_monthly_payment, 0.0);
        assert_eq!(result.down_payment_percent, 0.0);
    }
}
