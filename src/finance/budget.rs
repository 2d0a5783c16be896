//! Percentage-rule budgets and expense breakdowns

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::non_negative;

/// Split of income between needs, wants and savings, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRule {
    pub needs_percent: f64,
    pub wants_percent: f64,
    pub savings_percent: f64,
}

impl Default for BudgetRule {
    /// The 50/30/20 rule
    fn default() -> Self {
        Self {
            needs_percent: 50.0,
            wants_percent: 30.0,
            savings_percent: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Needs,
    Wants,
    Savings,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 3] = [Self::Needs, Self::Wants, Self::Savings];
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Needs => write!(f, "Needs"),
            Self::Wants => write!(f, "Wants"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "needs" | "need" => Ok(Self::Needs),
            "wants" | "want" => Ok(Self::Wants),
            "savings" | "saving" | "save" => Ok(Self::Savings),
            other => Err(format!("unknown budget category '{}'", other)),
        }
    }
}

/// A single monthly expense line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: f64,
    pub category: BudgetCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: BudgetCategory,
    pub amount: f64,
    pub percent_of_income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalysis {
    pub monthly_income: f64,
    /// Needs and wants; savings lines are not spending
    pub total_expenses: f64,
    /// Income left after expenses and planned savings
    pub remaining: f64,
    /// Planned savings plus anything left over, as a share of income
    pub savings_rate_percent: f64,
    pub by_category: Vec<CategoryTotal>,
}

/// Split monthly income according to a percentage rule
pub fn calculate_budget_rule(monthly_income: f64, rule: &BudgetRule) -> BudgetAllocation {
    let income = non_negative(monthly_income);

    BudgetAllocation {
        needs: income * rule.needs_percent / 100.0,
        wants: income * rule.wants_percent / 100.0,
        savings: income * rule.savings_percent / 100.0,
    }
}

/// Total expenses per category and compare them with income
pub fn analyze_budget(monthly_income: f64, expenses: &[Expense]) -> BudgetAnalysis {
    let income = non_negative(monthly_income);
    let percent = |amount: f64| if income > 0.0 { amount / income * 100.0 } else { 0.0 };

    let by_category: Vec<CategoryTotal> = BudgetCategory::ALL
        .iter()
        .map(|&category| {
            let amount: f64 = expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| non_negative(e.amount))
                .sum();
            CategoryTotal {
                category,
                amount,
                percent_of_income: percent(amount),
            }
        })
        .collect();

    let planned_savings: f64 = by_category
        .iter()
        .filter(|c| c.category == BudgetCategory::Savings)
        .map(|c| c.amount)
        .sum();
    let total_expenses: f64 = by_category
        .iter()
        .filter(|c| c.category != BudgetCategory::Savings)
        .map(|c| c.amount)
        .sum();
    let remaining = income - total_expenses - planned_savings;

    BudgetAnalysis {
        monthly_income: income,
        total_expenses,
        remaining,
        savings_rate_percent: percent(planned_savings + remaining.max(0.0)),
        by_category,
    }
}
