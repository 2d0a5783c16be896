//! Progressive income tax
//!
//! Ships the 2024 US federal ordinary income brackets and standard
//! deductions. `calculate_tax_from_brackets` works with any bracket table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::non_negative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married filing jointly",
            Self::MarriedFilingSeparately => "Married filing separately",
            Self::HeadOfHousehold => "Head of household",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FilingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "married-filing-jointly" | "married-jointly" | "joint" | "mfj" => {
                Ok(Self::MarriedFilingJointly)
            }
            "married-filing-separately" | "married-separately" | "separate" | "mfs" => {
                Ok(Self::MarriedFilingSeparately)
            }
            "head-of-household" | "head" | "hoh" => Ok(Self::HeadOfHousehold),
            other => Err(format!("unknown filing status '{}'", other)),
        }
    }
}

/// One marginal bracket: income in `[lower, upper)` is taxed at `rate` percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub rate: f64,
    pub lower: f64,
    /// `None` for the top bracket
    pub upper: Option<f64>,
}

const fn bracket(rate: f64, lower: f64, upper: f64) -> TaxBracket {
    TaxBracket {
        rate,
        lower,
        upper: Some(upper),
    }
}

const fn top(rate: f64, lower: f64) -> TaxBracket {
    TaxBracket {
        rate,
        lower,
        upper: None,
    }
}

const SINGLE_2024: [TaxBracket; 7] = [
    bracket(10.0, 0.0, 11_600.0),
    bracket(12.0, 11_600.0, 47_150.0),
    bracket(22.0, 47_150.0, 100_525.0),
    bracket(24.0, 100_525.0, 191_950.0),
    bracket(32.0, 191_950.0, 243_725.0),
    bracket(35.0, 243_725.0, 609_350.0),
    top(37.0, 609_350.0),
];

const MARRIED_JOINTLY_2024: [TaxBracket; 7] = [
    bracket(10.0, 0.0, 23_200.0),
    bracket(12.0, 23_200.0, 94_300.0),
    bracket(22.0, 94_300.0, 201_050.0),
    bracket(24.0, 201_050.0, 383_900.0),
    bracket(32.0, 383_900.0, 487_450.0),
    bracket(35.0, 487_450.0, 731_200.0),
    top(37.0, 731_200.0),
];

const MARRIED_SEPARATELY_2024: [TaxBracket; 7] = [
    bracket(10.0, 0.0, 11_600.0),
    bracket(12.0, 11_600.0, 47_150.0),
    bracket(22.0, 47_150.0, 100_525.0),
    bracket(24.0, 100_525.0, 191_950.0),
    bracket(32.0, 191_950.0, 243_725.0),
    bracket(35.0, 243_725.0, 365_600.0),
    top(37.0, 365_600.0),
];

const HEAD_OF_HOUSEHOLD_2024: [TaxBracket; 7] = [
    bracket(10.0, 0.0, 16_550.0),
    bracket(12.0, 16_550.0, 63_100.0),
    bracket(22.0, 63_100.0, 100_500.0),
    bracket(24.0, 100_500.0, 191_950.0),
    bracket(32.0, 191_950.0, 243_700.0),
    bracket(35.0, 243_700.0, 609_350.0),
    top(37.0, 609_350.0),
];

/// Federal ordinary income brackets for a filing status
pub fn federal_brackets(status: FilingStatus) -> &'static [TaxBracket] {
    match status {
        FilingStatus::Single => &SINGLE_2024,
        FilingStatus::MarriedFilingJointly => &MARRIED_JOINTLY_2024,
        FilingStatus::MarriedFilingSeparately => &MARRIED_SEPARATELY_2024,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD_2024,
    }
}

/// Federal standard deduction for a filing status
pub fn standard_deduction(status: FilingStatus) -> f64 {
    match status {
        FilingStatus::Single | FilingStatus::MarriedFilingSeparately => 14_600.0,
        FilingStatus::MarriedFilingJointly => 29_200.0,
        FilingStatus::HeadOfHousehold => 21_900.0,
    }
}

/// Tax owed within one bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketTax {
    pub rate: f64,
    pub taxable_amount: f64,
    pub tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    pub filing_status: FilingStatus,
    pub gross_income: f64,
    pub deduction: f64,
    pub taxable_income: f64,
    pub total_tax: f64,
    /// Total tax as a percent of gross income
    pub effective_rate: f64,
    /// Rate of the highest bracket reached
    pub marginal_rate: f64,
    pub after_tax_income: f64,
    /// Only brackets that actually hold income
    pub bracket_breakdown: Vec<BracketTax>,
}

/// Apply marginal brackets to `taxable_income`
///
/// Returns the total tax and the per-bracket amounts for every bracket that
/// holds income.
pub fn calculate_tax_from_brackets(taxable_income: f64, brackets: &[TaxBracket]) -> (f64, Vec<BracketTax>) {
    let income = non_negative(taxable_income);
    let mut breakdown = Vec::new();
    let mut total = 0.0;

    for b in brackets {
        if income <= b.lower {
            break;
        }
        let ceiling = b.upper.map_or(income, |upper| income.min(upper));
        let taxable_amount = ceiling - b.lower;
        let tax = taxable_amount * b.rate / 100.0;
        total += tax;
        breakdown.push(BracketTax {
            rate: b.rate,
            taxable_amount,
            tax,
        });
    }

    (total, breakdown)
}

/// Federal income tax on `gross_income`
///
/// Without an explicit `deduction` the standard deduction for the filing
/// status applies.
///
/// ```
/// use fincalc::finance::{calculate_income_tax, FilingStatus};
///
/// let result = calculate_income_tax(75_000.0, FilingStatus::Single, None);
/// assert_eq!(result.taxable_income, 60_400.0);
/// assert_eq!(result.marginal_rate, 22.0);
/// ```
pub fn calculate_income_tax(gross_income: f64, status: FilingStatus, deduction: Option<f64>) -> TaxResult {
    let gross_income = non_negative(gross_income);
    let deduction = deduction.map(non_negative).unwrap_or_else(|| standard_deduction(status));
    let taxable_income = (gross_income - deduction).max(0.0);

    let (total_tax, bracket_breakdown) =
        calculate_tax_from_brackets(taxable_income, federal_brackets(status));

    let marginal_rate = bracket_breakdown.last().map_or(0.0, |b| b.rate);
    let effective_rate = if gross_income > 0.0 {
        total_tax / gross_income * 100.0
    } else {
        0.0
    };

    TaxResult {
        filing_status: status,
        gross_income,
        deduction,
        taxable_income,
        total_tax,
        effective_rate,
        marginal_rate,
        after_tax_income: gross_income - total_tax,
        bracket_breakdown,
    }
}
