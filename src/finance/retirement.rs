//! Retirement savings projection

use serde::{Deserialize, Serialize};

use super::{monthly_rate, non_negative, MAX_PROJECTION_YEARS};

/// Inputs to the retirement projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Expected annual return, percent
    pub annual_return: f64,
    /// Yearly raise applied to the monthly contribution, percent
    pub annual_contribution_increase: f64,
    /// Used to express the projected balance in today's money, percent
    pub inflation_rate: f64,
    /// Share of the balance withdrawn per year in retirement, percent
    pub withdrawal_rate: f64,
}

impl Default for RetirementInput {
    fn default() -> Self {
        Self {
            current_age: 30,
            retirement_age: 65,
            current_savings: 0.0,
            monthly_contribution: 0.0,
            annual_return: 7.0,
            annual_contribution_increase: 0.0,
            inflation_rate: 3.0,
            withdrawal_rate: 4.0,
        }
    }
}

/// Balance at the end of one year of saving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementYear {
    /// Age at the end of the year
    pub age: u32,
    pub balance: f64,
    /// Cumulative contributions including starting savings
    pub contributions: f64,
    /// Cumulative investment growth
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    pub years_to_retirement: u32,
    pub projected_savings: f64,
    /// Projected savings deflated to today's money
    pub inflation_adjusted_savings: f64,
    pub total_contributions: f64,
    pub total_growth: f64,
    pub annual_retirement_income: f64,
    pub monthly_retirement_income: f64,
    pub yearly_breakdown: Vec<RetirementYear>,
}

/// Project savings from now until retirement
///
/// Contributions are added at the end of each month with monthly
/// compounding, and step up once a year by `annual_contribution_increase`.
pub fn calculate_retirement(input: &RetirementInput) -> RetirementProjection {
    let years = input
        .retirement_age
        .saturating_sub(input.current_age)
        .min(MAX_PROJECTION_YEARS);
    let rate = monthly_rate(input.annual_return);
    let raise = 1.0 + input.annual_contribution_increase / 100.0;

    let mut balance = non_negative(input.current_savings);
    let mut contributed = balance;
    let mut contribution = non_negative(input.monthly_contribution);
    let mut yearly_breakdown = Vec::with_capacity(years as usize);

    for year in 1..=years {
        for _ in 0..12 {
            balance = balance * (1.0 + rate) + contribution;
        }
        contributed += contribution * 12.0;

        yearly_breakdown.push(RetirementYear {
            age: input.current_age + year,
            balance,
            contributions: contributed,
            growth: balance - contributed,
        });

        contribution = non_negative(contribution * raise);
    }

    let deflator = (1.0 + input.inflation_rate / 100.0).powi(years as i32);
    let inflation_adjusted_savings = if deflator > 0.0 { balance / deflator } else { 0.0 };
    let annual_retirement_income = balance * non_negative(input.withdrawal_rate) / 100.0;

    RetirementProjection {
        years_to_retirement: years,
        projected_savings: balance,
        inflation_adjusted_savings,
        total_contributions: contributed,
        total_growth: balance - contributed,
        annual_retirement_income,
        monthly_retirement_income: annual_retirement_income / 12.0,
        yearly_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_without_growth() {
        let input = RetirementInput {
            current_age: 60,
            retirement_age: 65,
            current_savings: 10_000.0,
            monthly_contribution: 500.0,
            annual_return: 0.0,
            inflation_rate: 0.0,
            ..Default::default()
        };
        let result = calculate_retirement(&input);

        assert_eq!(result.years_to_retirement, 5);
        assert!((result.projected_savings - 40_000.0).abs() < 1e-9);
        assert!((result.total_contributions - 40_000.0).abs() < 1e-9);
        assert!(result.total_growth.abs() < 1e-9);
        assert!((result.annual_retirement_income - 1_600.0).abs() < 1e-9);
        assert_eq!(result.yearly_breakdown.len(), 5);
        assert_eq!(result.yearly_breakdown[4].age, 65);
    }

    #[test]
    fn test_lump_sum_matches_monthly_compounding() {
        let input = RetirementInput {
            current_age: 40,
            retirement_age: 50,
            current_savings: 100_000.0,
            monthly_contribution: 0.0,
            annual_return: 6.0,
            inflation_rate: 2.0,
            ..Default::default()
        };
        let result = calculate_retirement(&input);

        let expected = 100_000.0 * 1.005f64.powi(120);
        assert!((result.projected_savings - expected).abs() < 1e-6);
        assert!(result.inflation_adjusted_savings < result.projected_savings);
    }

    #[test]
    fn test_contribution_increase() {
        let flat = calculate_retirement(&RetirementInput {
            monthly_contribution: 100.0,
            annual_return: 0.0,
            current_age: 30,
            retirement_age: 32,
            ..Default::default()
        });
        let rising = calculate_retirement(&RetirementInput {
            monthly_contribution: 100.0,
            annual_return: 0.0,
            annual_contribution_increase: 10.0,
            current_age: 30,
            retirement_age: 32,
            ..Default::default()
        });

        assert!((flat.total_contributions - 2_400.0).abs() < 1e-9);
        assert!((rising.total_contributions - 2_520.0).abs() < 1e-9);
    }

    #[test]
    fn test_already_retired() {
        let result = calculate_retirement(&RetirementInput {
            current_age: 70,
            retirement_age: 65,
            current_savings: 500_000.0,
            ..Default::default()
        });
        assert_eq!(result.years_to_retirement, 0);
        assert!(result.yearly_breakdown.is_empty());
        assert_eq!(result.projected_savings, 500_000.0);
        assert_eq!(result.annual_retirement_income, 20_000.0);
    }
}
