//! History entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{is_valid_date_format, DEFAULT_DATE_FORMAT};

/// Calculators that can appear in the history log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    Loan,
    Amortization,
    ExtraPayment,
    Mortgage,
    AutoLoan,
    CreditCard,
    CompoundInterest,
    SimpleInterest,
    Cagr,
    Roi,
    #[serde(rename = "rule-of-72")]
    RuleOf72,
    TimeValue,
    Inflation,
    SavingsGoal,
    EmergencyFund,
    Retirement,
    Fire,
    DebtPayoff,
    Budget,
    Salary,
    IncomeTax,
    NetWorth,
    DebtToIncome,
}

impl std::fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CalculatorKind::Loan => "Loan",
            CalculatorKind::Amortization => "Amortization",
            CalculatorKind::ExtraPayment => "Extra Payment",
            CalculatorKind::Mortgage => "Mortgage",
            CalculatorKind::AutoLoan => "Auto Loan",
            CalculatorKind::CreditCard => "Credit Card",
            CalculatorKind::CompoundInterest => "Compound Interest",
            CalculatorKind::SimpleInterest => "Simple Interest",
            CalculatorKind::Cagr => "CAGR",
            CalculatorKind::Roi => "ROI",
            CalculatorKind::RuleOf72 => "Rule of 72",
            CalculatorKind::TimeValue => "Time Value",
            CalculatorKind::Inflation => "Inflation",
            CalculatorKind::SavingsGoal => "Savings Goal",
            CalculatorKind::EmergencyFund => "Emergency Fund",
            CalculatorKind::Retirement => "Retirement",
            CalculatorKind::Fire => "FIRE",
            CalculatorKind::DebtPayoff => "Debt Payoff",
            CalculatorKind::Budget => "Budget",
            CalculatorKind::Salary => "Salary",
            CalculatorKind::IncomeTax => "Income Tax",
            CalculatorKind::NetWorth => "Net Worth",
            CalculatorKind::DebtToIncome => "Debt-to-Income",
        };
        write!(f, "{}", name)
    }
}

/// A single recorded calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the calculation ran (UTC)
    pub timestamp: DateTime<Utc>,

    /// Which calculator produced it
    pub calculator: CalculatorKind,

    /// JSON representation of the inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<serde_json::Value>,

    /// One-line description of the headline result
    pub result_summary: String,
}

impl HistoryEntry {
    /// Create a new entry stamped with the current time
    pub fn new<T: Serialize>(
        calculator: CalculatorKind,
        inputs: &T,
        result_summary: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            calculator,
            inputs: serde_json::to_value(inputs).ok(),
            result_summary: result_summary.into(),
        }
    }

    /// Format the entry for human-readable output
    ///
    /// An unrecognized `date_format` falls back to `%Y-%m-%d`.
    pub fn format_human_readable(&self, date_format: &str) -> String {
        let date_format = if is_valid_date_format(date_format) {
            date_format
        } else {
            DEFAULT_DATE_FORMAT
        };

        format!(
            "[{}] {:<18} {}",
            self.timestamp.format(&format!("{} %H:%M:%S", date_format)),
            self.calculator.to_string(),
            self.result_summary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_calculator_display() {
        assert_eq!(CalculatorKind::Fire.to_string(), "FIRE");
        assert_eq!(CalculatorKind::DebtPayoff.to_string(), "Debt Payoff");
    }

    #[test]
    fn test_new_entry() {
        let entry = HistoryEntry::new(
            CalculatorKind::Loan,
            &json!({"principal": 25000, "rate": 6}),
            "Monthly payment $483.32",
        );

        assert_eq!(entry.calculator, CalculatorKind::Loan);
        assert_eq!(entry.inputs.as_ref().unwrap()["principal"], 25000);
        assert_eq!(entry.result_summary, "Monthly payment $483.32");
    }

    #[test]
    fn test_serialization() {
        let entry = HistoryEntry::new(CalculatorKind::RuleOf72, &json!({"rate": 8}), "9.0 years");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"calculator\":\"rule-of-72\""));

        let deserialized: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.calculator, CalculatorKind::RuleOf72);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = HistoryEntry::new(CalculatorKind::Mortgage, &json!({}), "Total monthly $2,678.97");

        let formatted = entry.format_human_readable("%Y-%m-%d");
        assert!(formatted.contains("Mortgage"));
        assert!(formatted.contains("$2,678.97"));
        assert!(formatted.starts_with('['));
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let entry = HistoryEntry::new(CalculatorKind::Roi, &json!({}), "ROI 50.00%");

        let formatted = entry.format_human_readable("%Q");
        let expected_date = entry.timestamp.format("%Y-%m-%d").to_string();
        assert!(formatted.starts_with(&format!("[{}", expected_date)));
        assert!(formatted.contains("ROI 50.00%"));
    }
}
