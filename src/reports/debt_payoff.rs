//! Debt Payoff Report
//!
//! Shows the payoff order, when each debt is cleared, and how the combined
//! balance falls month by month.

use std::io::Write;

use crate::display::{
    double_separator, format_amount, format_bar, format_duration, format_percentage, separator,
    truncate,
};
use crate::error::FincalcResult;
use crate::finance::{
    calculate_debt_avalanche, calculate_debt_snowball, Debt, DebtPayoffPlan, PayoffStrategy,
};

use super::export_error;

const BAR_WIDTH: usize = 20;

/// Debt Payoff Report
#[derive(Debug, Clone)]
pub struct DebtPayoffReport {
    pub plan: DebtPayoffPlan,
    /// Sum of minimums plus the extra payment
    pub monthly_budget: f64,
    pub extra_payment: f64,
}

impl DebtPayoffReport {
    /// Run the chosen strategy over `debts`
    pub fn generate(debts: &[Debt], extra_payment: f64, strategy: PayoffStrategy) -> Self {
        let plan = match strategy {
            PayoffStrategy::Snowball => calculate_debt_snowball(debts, extra_payment),
            PayoffStrategy::Avalanche => calculate_debt_avalanche(debts, extra_payment),
        };

        let extra_payment = extra_payment.max(0.0);
        let monthly_budget =
            debts.iter().map(|d| d.minimum_payment.max(0.0)).sum::<f64>() + extra_payment;

        Self {
            plan,
            monthly_budget,
            extra_payment,
        }
    }

    /// Combined balance before the first payment
    pub fn starting_balance(&self) -> f64 {
        self.plan.debts.iter().map(|d| d.original_balance).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let plan = &self.plan;

        output.push_str(&format!("Debt Payoff Plan ({})\n", plan.strategy));
        output.push_str(&double_separator(72));
        output.push('\n');

        output.push_str(&format!(
            "Monthly budget:  {:>15}  (extra {})\n",
            format_amount(self.monthly_budget, symbol),
            format_amount(self.extra_payment, symbol)
        ));
        output.push_str(&format!(
            "Starting debt:   {:>15}\n",
            format_amount(self.starting_balance(), symbol)
        ));
        output.push_str(&format!(
            "Total interest:  {:>15}\n",
            format_amount(plan.total_interest, symbol)
        ));
        output.push_str(&format!(
            "Total paid:      {:>15}\n",
            format_amount(plan.total_payment, symbol)
        ));
        if plan.paid_off {
            output.push_str(&format!(
                "Debt free in:    {:>15}\n",
                format_duration(plan.total_months)
            ));
        } else {
            output.push_str(&format!(
                "Not debt free after {}; the budget does not cover the interest.\n",
                format_duration(plan.total_months)
            ));
        }
        output.push('\n');

        output.push_str(&format!(
            "{:<3} {:<22} {:>14} {:>8} {:>10} {:>12}\n",
            "#", "Debt", "Balance", "Rate", "Paid off", "Interest"
        ));
        output.push_str(&separator(72));
        output.push('\n');

        for (idx, debt) in plan.debts.iter().enumerate() {
            let payoff = debt
                .payoff_month
                .map_or_else(|| "never".to_string(), |m| format!("month {}", m));

            output.push_str(&format!(
                "{:<3} {:<22} {:>14} {:>8} {:>10} {:>12}\n",
                idx + 1,
                truncate(&debt.name, 22),
                format_amount(debt.original_balance, symbol),
                format_percentage(debt.annual_rate),
                payoff,
                format_amount(debt.interest_paid, symbol)
            ));
        }

        if !plan.monthly_progress.is_empty() {
            let start = self.starting_balance();

            output.push('\n');
            output.push_str(&format!(
                "{:>6} {:>12} {:>12} {:>14}  {}\n",
                "Month", "Payment", "Interest", "Remaining", "Progress"
            ));
            output.push_str(&separator(72));
            output.push('\n');

            for month in &plan.monthly_progress {
                output.push_str(&format!(
                    "{:>6} {:>12} {:>12} {:>14}  {}\n",
                    month.month,
                    format_amount(month.payment, symbol),
                    format_amount(month.interest, symbol),
                    format_amount(month.remaining_balance, symbol),
                    format_bar(month.remaining_balance, start, BAR_WIDTH)
                ));
            }
        }

        output
    }

    /// Export the month-by-month progress to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FincalcResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(["Month", "Payment", "Interest", "Remaining Balance"])
            .map_err(export_error)?;

        for month in &self.plan.monthly_progress {
            wtr.write_record([
                month.month.to_string(),
                format!("{:.2}", month.payment),
                format!("{:.2}", month.interest),
                format!("{:.2}", month.remaining_balance),
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

    fn debts() -> Vec<Debt> {
        vec![
            Debt::new("Small", 100.0, 0.0, 50.0),
            Debt::new("Large", 1_000.0, 0.0, 50.0),
        ]
    }

    #[test]
    fn test_generate() {
        let report = DebtPayoffReport::generate(&debts(), 25.0, PayoffStrategy::Snowball);
        assert_eq!(report.monthly_budget, 125.0);
        assert_eq!(report.starting_balance(), 1_100.0);
        assert!(report.plan.paid_off);
    }

    #[test]
    fn test_format_terminal() {
        let report = DebtPayoffReport::generate(&debts(), 0.0, PayoffStrategy::Avalanche);
        let output = report.format_terminal("$");

        assert!(output.contains("Debt Payoff Plan (Avalanche)"));
        assert!(output.contains("Small"));
        assert!(output.contains("month 11"));
        assert!(output.contains("Debt free in"));
    }

    #[test]
    fn test_unpayable_plan_is_flagged() {
        let report = DebtPayoffReport::generate(
            &[Debt::new("Underwater", 10_000.0, 24.0, 100.0)],
            0.0,
            PayoffStrategy::Snowball,
        );
        let output = report.format_terminal("$");
        assert!(output.contains("Not debt free"));
        assert!(output.contains("never"));
    }

    #[test]
    fn test_csv_export() {
        let report = DebtPayoffReport::generate(&debts(), 0.0, PayoffStrategy::Snowball);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();
        assert_eq!(lines[0], "Month,Payment,Interest,Remaining Balance");
        assert_eq!(lines[1], "1,100.00,0.00,1000.00");
        assert_eq!(lines.len(), 12);
    }
}
