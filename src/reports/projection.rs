//! Projection Report
//!
//! Year-by-year growth tables for the compound interest, retirement and FIRE
//! calculators.

use std::io::Write;

use crate::display::{double_separator, format_amount, format_bar, separator};
use crate::error::FincalcResult;
use crate::finance::{CompoundInterestResult, FireResult, RetirementProjection};

use super::export_error;

const BAR_WIDTH: usize = 20;

/// One projected year
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRow {
    /// Year number or age, depending on the report
    pub period: u32,
    pub balance: f64,
    /// Cumulative contributions, when the calculator tracks them
    pub contributions: Option<f64>,
    /// Cumulative growth, when the calculator tracks it
    pub growth: Option<f64>,
}

/// Projection Report
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub title: String,
    /// Heading of the first column ("Year" or "Age")
    pub period_label: &'static str,
    /// Balance the projection is working toward, if any
    pub target: Option<f64>,
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionReport {
    pub fn from_compound(result: &CompoundInterestResult) -> Self {
        Self {
            title: "Compound Interest Growth".to_string(),
            period_label: "Year",
            target: None,
            rows: result
                .yearly_breakdown
                .iter()
                .map(|y| ProjectionRow {
                    period: y.year,
                    balance: y.balance,
                    contributions: Some(y.contributions),
                    growth: Some(y.interest),
                })
                .collect(),
        }
    }

    pub fn from_retirement(result: &RetirementProjection) -> Self {
        Self {
            title: "Retirement Savings Projection".to_string(),
            period_label: "Age",
            target: None,
            rows: result
                .yearly_breakdown
                .iter()
                .map(|y| ProjectionRow {
                    period: y.age,
                    balance: y.balance,
                    contributions: Some(y.contributions),
                    growth: Some(y.growth),
                })
                .collect(),
        }
    }

    /// FIRE progress, with each year's bar measured against the FIRE number
    pub fn from_fire(result: &FireResult) -> Self {
        Self {
            title: "Progress Toward Financial Independence".to_string(),
            period_label: "Year",
            target: Some(result.fire_number),
            rows: result
                .yearly_progress
                .iter()
                .map(|y| ProjectionRow {
                    period: y.year,
                    balance: y.net_worth,
                    contributions: None,
                    growth: None,
                })
                .collect(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let optional = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format_amount(v, symbol));

        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&double_separator(72));
        output.push('\n');

        if let Some(target) = self.target {
            output.push_str(&format!("Target: {}\n\n", format_amount(target, symbol)));
        }

        output.push_str(&format!(
            "{:>5} {:>16} {:>16} {:>16}",
            self.period_label, "Balance", "Contributions", "Growth"
        ));
        if self.target.is_some() {
            output.push_str("  Progress");
        }
        output.push('\n');
        output.push_str(&separator(72));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:>5} {:>16} {:>16} {:>16}",
                row.period,
                format_amount(row.balance, symbol),
                optional(row.contributions),
                optional(row.growth)
            ));
            if let Some(target) = self.target {
                output.push_str("  ");
                output.push_str(&format_bar(row.balance.min(target), target, BAR_WIDTH));
            }
            output.push('\n');
        }

        output
    }

    /// Export the rows to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FincalcResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        let optional = |value: Option<f64>| value.map_or_else(String::new, |v| format!("{:.2}", v));

        wtr.write_record([self.period_label, "Balance", "Contributions", "Growth"])
            .map_err(export_error)?;

        for row in &self.rows {
            wtr.write_record([
                row.period.to_string(),
                format!("{:.2}", row.balance),
                optional(row.contributions),
                optional(row.growth),
            ])
            .map_err(export_error)?;
        }

        wtr.flush().map_err(export_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::{
        calculate_compound_interest, calculate_fire, calculate_retirement, CompoundingFrequency,
        FireInput, RetirementInput,
    };

    #[test]
    fn test_compound_rows() {
        let result = calculate_compound_interest(1_000.0, 5.0, 3, CompoundingFrequency::Annually, 0.0);
        let report = ProjectionReport::from_compound(&result);

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].period, 1);
        assert_eq!(report.rows[0].contributions, Some(1_000.0));

        let output = report.format_terminal("$");
        assert!(output.contains("Compound Interest Growth"));
        assert!(output.contains("$1,050.00"));
        assert!(!output.contains("Progress"));
    }

    #[test]
    fn test_retirement_rows_use_age() {
        let input = RetirementInput {
            current_age: 60,
            retirement_age: 62,
            ..Default::default()
        };
        let report = ProjectionReport::from_retirement(&calculate_retirement(&input));

        assert_eq!(report.period_label, "Age");
        let ages: Vec<u32> = report.rows.iter().map(|r| r.period).collect();
        assert_eq!(ages, vec![61, 62]);
    }

    #[test]
    fn test_fire_progress() {
        let result = calculate_fire(&FireInput {
            annual_expenses: 40_000.0,
            withdrawal_rate: 4.0,
            current_net_worth: 100_000.0,
            annual_savings: 50_000.0,
            annual_return: 7.0,
        });
        let report = ProjectionReport::from_fire(&result);

        assert_eq!(report.rows[0].period, 0);
        assert_eq!(report.rows[0].contributions, None);

        let output = report.format_terminal("$");
        assert!(output.contains("Target: $1,000,000.00"));
        assert!(output.contains("Progress"));
    }

    #[test]
    fn test_csv_export() {
        let result = calculate_fire(&FireInput {
            annual_expenses: 4_000.0,
            withdrawal_rate: 4.0,
            current_net_worth: 200_000.0,
            annual_savings: 0.0,
            annual_return: 0.0,
        });
        let report = ProjectionReport::from_fire(&result);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines, vec!["Year,Balance,Contributions,Growth", "0,200000.00,,"]);
    }
}
