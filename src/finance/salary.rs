//! Pay rate conversion between frequencies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::non_negative;

const WEEKS_PER_YEAR: f64 = 52.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayFrequency {
    Hourly,
    Weekly,
    BiWeekly,
    SemiMonthly,
    Monthly,
    Annually,
}

impl PayFrequency {
    /// Pay periods per year; hourly depends on hours worked per week
    pub fn periods_per_year(&self, hours_per_week: f64) -> f64 {
        match self {
            Self::Hourly => hours_per_week * WEEKS_PER_YEAR,
            Self::Weekly => WEEKS_PER_YEAR,
            Self::BiWeekly => 26.0,
            Self::SemiMonthly => 24.0,
            Self::Monthly => 12.0,
            Self::Annually => 1.0,
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hourly => "hourly",
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::SemiMonthly => "semi-monthly",
            Self::Monthly => "monthly",
            Self::Annually => "annually",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PayFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" | "hour" => Ok(Self::Hourly),
            "weekly" | "week" => Ok(Self::Weekly),
            "bi-weekly" | "biweekly" => Ok(Self::BiWeekly),
            "semi-monthly" | "semimonthly" => Ok(Self::SemiMonthly),
            "monthly" | "month" => Ok(Self::Monthly),
            "annually" | "annual" | "yearly" | "salary" => Ok(Self::Annually),
            other => Err(format!("unknown pay frequency '{}'", other)),
        }
    }
}

/// The same pay expressed at every frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    pub hourly: f64,
    pub weekly: f64,
    pub biweekly: f64,
    pub semimonthly: f64,
    pub monthly: f64,
    pub annual: f64,
}

/// Convert `amount` paid at `frequency` to every other pay frequency
pub fn convert_salary(amount: f64, frequency: PayFrequency, hours_per_week: f64) -> SalaryBreakdown {
    let hours_per_week = non_negative(hours_per_week);
    let annual = non_negative(amount) * frequency.periods_per_year(hours_per_week);
    let hours_per_year = hours_per_week * WEEKS_PER_YEAR;

    SalaryBreakdown {
        hourly: if hours_per_year > 0.0 { annual / hours_per_year } else { 0.0 },
        weekly: annual / WEEKS_PER_YEAR,
        biweekly: annual / 26.0,
        semimonthly: annual / 24.0,
        monthly: annual / 12.0,
        annual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_to_annual() {
        let breakdown = convert_salary(25.0, PayFrequency::Hourly, 40.0);
        assert_eq!(breakdown.annual, 52_000.0);
        assert_eq!(breakdown.weekly, 1_000.0);
        assert_eq!(breakdown.biweekly, 2_000.0);
        assert_eq!(breakdown.hourly, 25.0);
    }

    #[test]
    fn test_annual_to_everything() {
        let breakdown = convert_salary(78_000.0, PayFrequency::Annually, 40.0);
        assert_eq!(breakdown.monthly, 6_500.0);
        assert_eq!(breakdown.semimonthly, 3_250.0);
        assert_eq!(breakdown.hourly, 37.5);
    }

    #[test]
    fn test_zero_hours() {
        let breakdown = convert_salary(5_000.0, PayFrequency::Monthly, 0.0);
        assert_eq!(breakdown.annual, 60_000.0);
        assert_eq!(breakdown.hourly, 0.0);
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("biweekly".parse::<PayFrequency>().unwrap(), PayFrequency::BiWeekly);
        assert!("fortnightly-ish".parse::<PayFrequency>().is_err());
    }
}
