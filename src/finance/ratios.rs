//! Debt-to-income ratio

use std::fmt;

use serde::{Deserialize, Serialize};

use super::non_negative;

/// Lender-style reading of a debt-to-income ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DtiRating {
    /// Below 20%
    Excellent,
    /// 20% to 36%
    Good,
    /// Above 36% up to 43%
    Manageable,
    /// Above 43%
    High,
}

impl DtiRating {
    pub fn from_ratio(ratio_percent: f64) -> Self {
        if ratio_percent < 20.0 {
            Self::Excellent
        } else if ratio_percent <= 36.0 {
            Self::Good
        } else if ratio_percent <= 43.0 {
            Self::Manageable
        } else {
            Self::High
        }
    }
}

impl fmt::Display for DtiRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Manageable => write!(f, "Manageable"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtToIncome {
    pub ratio_percent: f64,
    pub rating: DtiRating,
}

/// Monthly debt payments as a percent of gross monthly income
///
/// Zero income yields a ratio of 0 rather than dividing by zero.
pub fn calculate_debt_to_income(monthly_debt_payments: f64, gross_monthly_income: f64) -> DebtToIncome {
    let income = non_negative(gross_monthly_income);
    let ratio_percent = if income > 0.0 {
        non_negative(monthly_debt_payments) / income * 100.0
    } else {
        0.0
    };

    DebtToIncome {
        ratio_percent,
        rating: DtiRating::from_ratio(ratio_percent),
    }
}
