//! Summary tables for calculator results

use crate::finance::{
    AutoLoanResult, BudgetAllocation, BudgetAnalysis, CompoundInterestResult, CreditCardPayoff,
    DebtPayoffPlan, DebtToIncome, EmergencyFundResult, ExtraPaymentResult, FireResult,
    GoalTimeline, InflationResult, LoanPayment, MortgagePayment, NetWorthResult,
    RetirementProjection, RoiResult, RuleOf72Result, SalaryBreakdown, SavingsGoalResult,
    SimpleInterestResult, StrategyComparison, TaxResult,
};

use super::report::{format_amount, format_duration, format_percentage};
use super::summary::{Summary, SummaryRow};

impl Summary for LoanPayment {
    fn headline(&self, symbol: &str) -> String {
        format!("Monthly payment {}", format_amount(self.monthly_payment, symbol))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Monthly payment", self.monthly_payment, symbol),
            SummaryRow::amount("Total principal", self.total_principal, symbol),
            SummaryRow::amount("Total interest", self.total_interest, symbol),
            SummaryRow::amount("Total paid", self.total_payment, symbol),
        ]
    }
}

impl Summary for ExtraPaymentResult {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Saves {} and {}",
            format_amount(self.interest_saved, symbol),
            format_duration(self.months_saved)
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Original term", format_duration(self.original_months)),
            SummaryRow::new("New payoff", format_duration(self.payoff_months)),
            SummaryRow::new("Time saved", format_duration(self.months_saved)),
            SummaryRow::amount("Original interest", self.original_interest, symbol),
            SummaryRow::amount("New interest", self.total_interest, symbol),
            SummaryRow::amount("Interest saved", self.interest_saved, symbol),
        ]
    }
}

impl Summary for MortgagePayment {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Total monthly {}",
            format_amount(self.total_monthly_payment, symbol)
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Loan amount", self.loan_amount, symbol),
            SummaryRow::percent("Down payment", self.down_payment_percent),
            SummaryRow::amount("Principal & interest", self.principal_and_interest, symbol),
            SummaryRow::amount("Property tax", self.monthly_property_tax, symbol),
            SummaryRow::amount("Insurance", self.monthly_insurance, symbol),
            SummaryRow::amount("PMI", self.monthly_pmi, symbol),
            SummaryRow::amount("HOA", self.monthly_hoa, symbol),
            SummaryRow::amount("Total monthly payment", self.total_monthly_payment, symbol),
            SummaryRow::amount("Total interest", self.total_interest, symbol),
            SummaryRow::amount("Total cost", self.total_cost, symbol),
        ]
    }
}

impl Summary for AutoLoanResult {
    fn headline(&self, symbol: &str) -> String {
        format!("Monthly payment {}", format_amount(self.monthly_payment, symbol))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Sales tax", self.sales_tax, symbol),
            SummaryRow::amount("Amount financed", self.amount_financed, symbol),
            SummaryRow::amount("Monthly payment", self.monthly_payment, symbol),
            SummaryRow::amount("Total interest", self.total_interest, symbol),
            SummaryRow::amount("Total cost", self.total_cost, symbol),
        ]
    }
}

impl Summary for CreditCardPayoff {
    fn headline(&self, symbol: &str) -> String {
        if self.paid_off {
            format!(
                "Paid off in {}, {} interest",
                format_duration(self.months),
                format_amount(self.total_interest, symbol)
            )
        } else {
            format!("Not paid off after {}", format_duration(self.months))
        }
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        let payoff = if self.paid_off {
            format_duration(self.months)
        } else {
            format!("Never (stopped after {})", format_duration(self.months))
        };

        vec![
            SummaryRow::new("Time to payoff", payoff),
            SummaryRow::amount("Total interest", self.total_interest, symbol),
            SummaryRow::amount("Total paid", self.total_paid, symbol),
        ]
    }
}

impl Summary for CompoundInterestResult {
    fn headline(&self, symbol: &str) -> String {
        format!("Final balance {}", format_amount(self.final_balance, symbol))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Final balance", self.final_balance, symbol),
            SummaryRow::amount("Total contributions", self.total_contributions, symbol),
            SummaryRow::amount("Total interest", self.total_interest, symbol),
        ]
    }
}

impl Summary for SimpleInterestResult {
    fn headline(&self, symbol: &str) -> String {
        format!("Interest {}", format_amount(self.interest, symbol))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Interest", self.interest, symbol),
            SummaryRow::amount("Total", self.total, symbol),
        ]
    }
}

impl Summary for RoiResult {
    fn headline(&self, _symbol: &str) -> String {
        format!("ROI {}", format_percentage(self.roi_percent))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Net profit", self.net_profit, symbol),
            SummaryRow::percent("ROI", self.roi_percent),
            SummaryRow::percent("Annualized ROI", self.annualized_roi_percent),
        ]
    }
}

impl Summary for RuleOf72Result {
    fn headline(&self, _symbol: &str) -> String {
        format!("Doubles in about {:.1} years", self.estimated_years)
    }

    fn summary_rows(&self, _symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Rule of 72 estimate", format!("{:.2} years", self.estimated_years)),
            SummaryRow::new("Exact doubling time", format!("{:.2} years", self.exact_years)),
        ]
    }
}

impl Summary for InflationResult {
    fn headline(&self, symbol: &str) -> String {
        format!("Future cost {}", format_amount(self.future_cost, symbol))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Future cost", self.future_cost, symbol),
            SummaryRow::amount("Purchasing power", self.purchasing_power, symbol),
            SummaryRow::percent("Cumulative inflation", self.cumulative_inflation_percent),
        ]
    }
}

impl Summary for SavingsGoalResult {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Save {} per month",
            format_amount(self.monthly_contribution, symbol)
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Monthly contribution", self.monthly_contribution, symbol),
            SummaryRow::amount("Total contributions", self.total_contributions, symbol),
            SummaryRow::amount("Interest earned", self.interest_earned, symbol),
            SummaryRow::amount("Current savings grow to", self.future_value_of_current, symbol),
        ]
    }
}

impl Summary for GoalTimeline {
    fn headline(&self, _symbol: &str) -> String {
        if self.reached {
            format!("Goal reached in {}", format_duration(self.months))
        } else {
            format!("Goal not reached after {}", format_duration(self.months))
        }
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Time to goal", format_duration(self.months)),
            SummaryRow::new("Reached", if self.reached { "yes" } else { "no" }),
            SummaryRow::amount("Final balance", self.final_balance, symbol),
        ]
    }
}

impl Summary for EmergencyFundResult {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Target {} ({} funded)",
            format_amount(self.target, symbol),
            format_percentage(self.percent_funded)
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        let timeline = if !self.reachable {
            "Not reachable without contributions".to_string()
        } else {
            format_duration(self.months_to_goal)
        };

        vec![
            SummaryRow::amount("Target fund", self.target, symbol),
            SummaryRow::amount("Shortfall", self.shortfall, symbol),
            SummaryRow::percent("Funded", self.percent_funded),
            SummaryRow::new("Time to goal", timeline),
        ]
    }
}

impl Summary for RetirementProjection {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Projected savings {}",
            format_amount(self.projected_savings, symbol)
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Years to retirement", self.years_to_retirement.to_string()),
            SummaryRow::amount("Projected savings", self.projected_savings, symbol),
            SummaryRow::amount("In today's dollars", self.inflation_adjusted_savings, symbol),
            SummaryRow::amount("Total contributions", self.total_contributions, symbol),
            SummaryRow::amount("Investment growth", self.total_growth, symbol),
            SummaryRow::amount("Annual income", self.annual_retirement_income, symbol),
            SummaryRow::amount("Monthly income", self.monthly_retirement_income, symbol),
        ]
    }
}

impl Summary for FireResult {
    fn headline(&self, symbol: &str) -> String {
        let timeline = if self.reached {
            format!("reached in {} years", self.years_to_fire)
        } else {
            format!("not reached within {} years", self.years_to_fire)
        };
        format!(
            "FIRE number {}, {}",
            format_amount(self.fire_number, symbol),
            timeline
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        let years = if self.reached {
            self.years_to_fire.to_string()
        } else {
            format!("Not within {}", self.years_to_fire)
        };

        vec![
            SummaryRow::amount("FIRE number", self.fire_number, symbol),
            SummaryRow::amount("Lean FIRE", self.lean_fire_number, symbol),
            SummaryRow::amount("Fat FIRE", self.fat_fire_number, symbol),
            SummaryRow::new("Years to FIRE", years),
            SummaryRow::amount("Projected net worth", self.projected_net_worth, symbol),
        ]
    }
}

impl Summary for DebtPayoffPlan {
    fn headline(&self, symbol: &str) -> String {
        if self.paid_off {
            format!(
                "{}: debt free in {}, {} interest",
                self.strategy,
                format_duration(self.total_months),
                format_amount(self.total_interest, symbol)
            )
        } else {
            format!(
                "{}: not debt free after {}",
                self.strategy,
                format_duration(self.total_months)
            )
        }
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Strategy", self.strategy.to_string()),
            SummaryRow::new("Debt free in", format_duration(self.total_months)),
            SummaryRow::new("Paid off", if self.paid_off { "yes" } else { "no" }),
            SummaryRow::amount("Total interest", self.total_interest, symbol),
            SummaryRow::amount("Total paid", self.total_payment, symbol),
        ]
    }
}

impl Summary for StrategyComparison {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Avalanche saves {} and {} months",
            format_amount(self.interest_saved, symbol),
            self.months_saved
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Snowball payoff", format_duration(self.snowball.total_months)),
            SummaryRow::amount("Snowball interest", self.snowball.total_interest, symbol),
            SummaryRow::new("Avalanche payoff", format_duration(self.avalanche.total_months)),
            SummaryRow::amount("Avalanche interest", self.avalanche.total_interest, symbol),
            SummaryRow::amount("Interest saved by avalanche", self.interest_saved, symbol),
            SummaryRow::new("Months saved by avalanche", self.months_saved.to_string()),
        ]
    }
}

impl Summary for BudgetAllocation {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Needs {} / Wants {} / Savings {}",
            format_amount(self.needs, symbol),
            format_amount(self.wants, symbol),
            format_amount(self.savings, symbol)
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Needs", self.needs, symbol),
            SummaryRow::amount("Wants", self.wants, symbol),
            SummaryRow::amount("Savings", self.savings, symbol),
        ]
    }
}

impl Summary for BudgetAnalysis {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Remaining {} (savings rate {})",
            format_amount(self.remaining, symbol),
            format_percentage(self.savings_rate_percent)
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        let mut rows = vec![SummaryRow::amount("Monthly income", self.monthly_income, symbol)];

        for total in &self.by_category {
            rows.push(SummaryRow::new(
                total.category.to_string(),
                format!(
                    "{} ({})",
                    format_amount(total.amount, symbol),
                    format_percentage(total.percent_of_income)
                ),
            ));
        }

        rows.push(SummaryRow::amount("Total expenses", self.total_expenses, symbol));
        rows.push(SummaryRow::amount("Remaining", self.remaining, symbol));
        rows.push(SummaryRow::percent("Savings rate", self.savings_rate_percent));
        rows
    }
}

impl Summary for SalaryBreakdown {
    fn headline(&self, symbol: &str) -> String {
        format!("Annual {}", format_amount(self.annual, symbol))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Hourly", self.hourly, symbol),
            SummaryRow::amount("Weekly", self.weekly, symbol),
            SummaryRow::amount("Bi-weekly", self.biweekly, symbol),
            SummaryRow::amount("Semi-monthly", self.semimonthly, symbol),
            SummaryRow::amount("Monthly", self.monthly, symbol),
            SummaryRow::amount("Annual", self.annual, symbol),
        ]
    }
}

impl Summary for TaxResult {
    fn headline(&self, symbol: &str) -> String {
        format!(
            "Tax {} (effective {}, marginal {})",
            format_amount(self.total_tax, symbol),
            format_percentage(self.effective_rate),
            format_percentage(self.marginal_rate)
        )
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        let mut rows = vec![
            SummaryRow::new("Filing status", self.filing_status.to_string()),
            SummaryRow::amount("Gross income", self.gross_income, symbol),
            SummaryRow::amount("Deduction", self.deduction, symbol),
            SummaryRow::amount("Taxable income", self.taxable_income, symbol),
        ];

        for bracket in &self.bracket_breakdown {
            rows.push(SummaryRow::new(
                format!("  {:.0}% bracket", bracket.rate),
                format!(
                    "{} on {}",
                    format_amount(bracket.tax, symbol),
                    format_amount(bracket.taxable_amount, symbol)
                ),
            ));
        }

        rows.push(SummaryRow::amount("Total tax", self.total_tax, symbol));
        rows.push(SummaryRow::percent("Effective rate", self.effective_rate));
        rows.push(SummaryRow::percent("Marginal rate", self.marginal_rate));
        rows.push(SummaryRow::amount("After-tax income", self.after_tax_income, symbol));
        rows
    }
}

impl Summary for NetWorthResult {
    fn headline(&self, symbol: &str) -> String {
        format!("Net worth {}", format_amount(self.net_worth, symbol))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::amount("Total assets", self.total_assets, symbol),
            SummaryRow::amount("Total liabilities", self.total_liabilities, symbol),
            SummaryRow::amount("Net worth", self.net_worth, symbol),
            SummaryRow::percent("Debt-to-asset ratio", self.debt_to_asset_ratio),
        ]
    }
}

impl Summary for DebtToIncome {
    fn headline(&self, _symbol: &str) -> String {
        format!(
            "DTI {} ({})",
            format_percentage(self.ratio_percent),
            self.rating
        )
    }

    fn summary_rows(&self, _symbol: &str) -> Vec<SummaryRow> {
        vec![
            SummaryRow::percent("Debt-to-income", self.ratio_percent),
            SummaryRow::new("Rating", self.rating.to_string()),
        ]
    }
}
