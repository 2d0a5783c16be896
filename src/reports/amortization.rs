//! Amortization Report
//!
//! Month-by-month loan schedule with optional yearly roll-up.

use std::io::Write;

use crate::error::FincalcResult;
use crate::finance::{
    calculate_loan_payment, generate_amortization_schedule, AmortizationEntry, LoanPayment,
};
use crate::display::{double_separator, format_amount, format_percentage, separator};

use super::export_error;

/// Totals for one year of the schedule
#[derive(Debug, Clone, PartialEq)]
pub struct YearTotals {
    pub year: u32,
    pub principal: f64,
    pub interest: f64,
    pub ending_balance: f64,
}

/// Amortization Report
#[derive(Debug, Clone)]
pub struct AmortizationReport {
    pub principal: f64,
    pub annual_rate: f64,
    pub years: f64,
    pub payment: LoanPayment,
    pub schedule: Vec<AmortizationEntry>,
}

impl AmortizationReport {
    /// Generate the schedule for a fixed-rate loan
    pub fn generate(principal: f64, annual_rate: f64, years: f64) -> Self {
        Self {
            principal,
            annual_rate,
            years,
            payment: calculate_loan_payment(principal, annual_rate, years),
            schedule: generate_amortization_schedule(principal, annual_rate, years),
        }
    }

    /// Roll the schedule up into calendar years of twelve payments
    pub fn yearly_totals(&self) -> Vec<YearTotals> {
        self.schedule
            .chunks(12)
            .enumerate()
            .map(|(idx, months)| YearTotals {
                year: idx as u32 + 1,
                principal: months.iter().map(|e| e.principal).sum(),
                interest: months.iter().map(|e| e.interest).sum(),
                ending_balance: months.last().map_or(0.0, |e| e.balance),
            })
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str, yearly: bool) -> String {
        let mut output = String::new();

        output.push_str("Amortization Schedule\n");
        output.push_str(&double_separator(64));
        output.push('\n');
        output.push_str(&format!(
            "Loan: {} at {} for {} payments\n",
            format_amount(self.principal, symbol),
            format_percentage(self.annual_rate),
            self.schedule.len()
        ));
        output.push_str(&format!(
            "Monthly payment: {:>14}\n",
            format_amount(self.payment.monthly_payment, symbol)
        ));
        output.push_str(&format!(
            "Total interest:  {:>14}\n",
            format_amount(self.payment.total_interest, symbol)
        ));
        output.push('\n');

        if yearly {
            output.push_str(&format!(
                "{:>6} {:>18} {:>18} {:>18}\n",
                "Year", "Principal", "Interest", "Balance"
            ));
            output.push_str(&separator(64));
            output.push('\n');

            for year in self.yearly_totals() {
                output.push_str(&format!(
                    "{:>6} {:>18} {:>18} {:>18}\n",
                    year.year,
                    format_amount(year.principal, symbol),
                    format_amount(year.interest, symbol),
                    format_amount(year.ending_balance, symbol)
                ));
            }
        } else {
            output.push_str(&format!(
                "{:>6} {:>14} {:>14} {:>14} {:>14}\n",
                "Month", "Payment", "Principal", "Interest", "Balance"
            ));
            output.push_str(&separator(64));
            output.push('\n');

            for entry in &self.schedule {
                output.push_str(&format!(
                    "{:>6} {:>14} {:>14} {:>14} {:>14}\n",
                    entry.month,
                    format_amount(entry.payment, symbol),
                    format_amount(entry.principal, symbol),
                    format_amount(entry.interest, symbol),
                    format_amount(entry.balance, symbol)
                ));
            }
        }

        output
    }

    /// Export the monthly schedule to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FincalcResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(["Month", "Payment", "Principal", "Interest", "Balance"])
            .map_err(export_error)?;

        for entry in &self.schedule {
            wtr.write_record([
                entry.month.to_string(),
                format!("{:.2}", entry.payment),
                format!("{:.2}", entry.principal),
                format!("{:.2}", entry.interest),
                format!("{:.2}", entry.balance),
            ])
            .map_err(export_error)?;
        }

        wtr.flush().map_err(export_error)?;
        Ok(())
    }
}
