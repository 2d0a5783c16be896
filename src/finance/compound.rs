//! Compound and simple interest

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{non_negative, MAX_PROJECTION_YEARS};

/// How often interest is credited within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// Compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Annually => 1,
            Self::SemiAnnually => 2,
            Self::Quarterly => 4,
            Self::Monthly => 12,
            Self::Daily => 365,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Annually => "annually",
            Self::SemiAnnually => "semi-annually",
            Self::Quarterly => "quarterly",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CompoundingFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "annually" | "annual" | "yearly" | "1" => Ok(Self::Annually),
            "semi-annually" | "semiannually" | "semi-annual" | "2" => Ok(Self::SemiAnnually),
            "quarterly" | "4" => Ok(Self::Quarterly),
            "monthly" | "12" => Ok(Self::Monthly),
            "daily" | "365" => Ok(Self::Daily),
            other => Err(format!(
                "unknown compounding frequency '{}' (use annually, semi-annually, quarterly, monthly or daily)",
                other
            )),
        }
    }
}

/// Balance at the end of one projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyBalance {
    pub year: u32,
    pub balance: f64,
    /// Cumulative contributions including the starting principal
    pub contributions: f64,
    /// Cumulative interest earned
    pub interest: f64,
}

/// Result of the compound interest calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub final_balance: f64,
    /// Starting principal plus every monthly contribution
    pub total_contributions: f64,
    pub total_interest: f64,
    pub yearly_breakdown: Vec<YearlyBalance>,
}

/// Result of the simple interest calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: f64,
    pub total: f64,
}

/// Grow `principal` for `years` with optional end-of-month contributions
///
/// Each year the existing balance grows by `(1 + r/n)^n`. Contributions land
/// at the end of each month and grow at the equivalent monthly rate
/// `(1 + r/n)^(n/12) - 1`, so with no contributions the result is exactly
/// `P(1 + r/n)^(nt)`.
///
/// ```
/// use fincalc::finance::{calculate_compound_interest, CompoundingFrequency};
///
/// let result = calculate_compound_interest(1_000.0, 5.0, 10, CompoundingFrequency::Annually, 0.0);
/// assert!((result.final_balance - 1_628.89).abs() < 0.01);
/// ```
pub fn calculate_compound_interest(
    principal: f64,
    annual_rate: f64,
    years: u32,
    frequency: CompoundingFrequency,
    monthly_contribution: f64,
) -> CompoundInterestResult {
    let principal = non_negative(principal);
    let contribution = non_negative(monthly_contribution);
    let years = years.min(MAX_PROJECTION_YEARS);

    let periods = frequency.periods_per_year() as f64;
    let period_rate = annual_rate / 100.0 / periods;
    let yearly_growth = (1.0 + period_rate).powf(periods);
    let equivalent_monthly = (1.0 + period_rate).powf(periods / 12.0) - 1.0;

    let contributions_fv = if equivalent_monthly == 0.0 {
        contribution * 12.0
    } else {
        contribution * ((1.0 + equivalent_monthly).powi(12) - 1.0) / equivalent_monthly
    };

    let mut balance = principal;
    let mut contributed = principal;
    let mut yearly_breakdown = Vec::with_capacity(years as usize);

    for year in 1..=years {
        balance = balance * yearly_growth + contributions_fv;
        contributed += contribution * 12.0;

        yearly_breakdown.push(YearlyBalance {
            year,
            balance,
            contributions: contributed,
            interest: balance - contributed,
        });
    }

    CompoundInterestResult {
        final_balance: balance,
        total_contributions: contributed,
        total_interest: balance - contributed,
        yearly_breakdown,
    }
}

/// Interest on the original principal only
pub fn calculate_simple_interest(principal: f64, annual_rate: f64, years: f64) -> SimpleInterestResult {
    let principal = non_negative(principal);
    let interest = principal * annual_rate / 100.0 * non_negative(years);

    SimpleInterestResult {
        interest,
        total: principal + interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FREQUENCIES: [CompoundingFrequency; 5] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Daily,
    ];

    #[test]
    fn test_zero_contribution_matches_closed_form() {
        for frequency in ALL_FREQUENCIES {
            let n = frequency.periods_per_year() as f64;
            let expected = 10_000.0 * (1.0 + 0.07 / n).powf(n * 15.0);
            let result = calculate_compound_interest(10_000.0, 7.0, 15, frequency, 0.0);

            let relative = (result.final_balance - expected).abs() / expected;
            assert!(relative < 1e-9, "{} drifted: {}", frequency, relative);
        }
    }

    #[test]
    fn test_monthly_contributions() {
        // 100/month at 12% compounded monthly for one year is an ordinary annuity
        let result = calculate_compound_interest(0.0, 12.0, 1, CompoundingFrequency::Monthly, 100.0);
        let expected = 100.0 * (1.01f64.powi(12) - 1.0) / 0.01;
        assert!((result.final_balance - expected).abs() < 1e-6);
        assert_eq!(result.total_contributions, 1_200.0);
    }

    #[test]
    fn test_zero_rate() {
        let result = calculate_compound_interest(1_000.0, 0.0, 5, CompoundingFrequency::Monthly, 50.0);
        assert!((result.final_balance - 4_000.0).abs() < 1e-9);
        assert!(result.total_interest.abs() < 1e-9);
    }

    #[test]
    fn test_yearly_breakdown() {
        let result = calculate_compound_interest(1_000.0, 5.0, 3, CompoundingFrequency::Annually, 0.0);
        assert_eq!(result.yearly_breakdown.len(), 3);
        assert_eq!(result.yearly_breakdown[0].year, 1);
        assert!((result.yearly_breakdown[0].balance - 1_050.0).abs() < 1e-9);
        assert!((result.yearly_breakdown[2].interest - 157.625).abs() < 1e-9);
    }

    #[test]
    fn test_years_are_capped() {
        let result = calculate_compound_interest(1.0, 1.0, 500, CompoundingFrequency::Annually, 0.0);
        assert_eq!(result.yearly_breakdown.len(), MAX_PROJECTION_YEARS as usize);
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("Quarterly".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::Quarterly);
        assert_eq!("365".parse::<CompoundingFrequency>().unwrap(), CompoundingFrequency::Daily);
        assert!("hourly".parse::<CompoundingFrequency>().is_err());
    }

    #[test]
    fn test_simple_interest() {
        let result = calculate_simple_interest(5_000.0, 4.0, 3.0);
        assert!((result.interest - 600.0).abs() < 1e-9);
        assert!((result.total - 5_600.0).abs() < 1e-9);
    }
}
