//! Savings goals: required contribution and time to reach a target

use serde::{Deserialize, Serialize};

use super::{monthly_rate, non_negative, years_to_months, MAX_PAYOFF_MONTHS};

/// Monthly saving needed to reach a goal by a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalResult {
    pub monthly_contribution: f64,
    pub total_contributions: f64,
    pub interest_earned: f64,
    /// What the current savings grow to on their own by the deadline
    pub future_value_of_current: f64,
}

/// How long a fixed monthly contribution takes to reach a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalTimeline {
    pub months: u32,
    pub reached: bool,
    pub final_balance: f64,
}

/// Monthly contribution needed to grow `current_savings` into `target` within `years`
///
/// Contributions are made at the end of each month and interest compounds
/// monthly. A goal the current savings already cover needs nothing more.
pub fn calculate_savings_goal(
    target: f64,
    current_savings: f64,
    annual_rate: f64,
    years: f64,
) -> SavingsGoalResult {
    let target = non_negative(target);
    let current = non_negative(current_savings);
    let rate = monthly_rate(annual_rate);
    let months = years_to_months(years);

    let future_value_of_current = current * (1.0 + rate).powi(months as i32);
    let remaining = (target - future_value_of_current).max(0.0);

    let monthly_contribution = if remaining == 0.0 {
        0.0
    } else if months == 0 {
        remaining
    } else if rate == 0.0 {
        remaining / months as f64
    } else {
        remaining * rate / ((1.0 + rate).powi(months as i32) - 1.0)
    };

    let total_contributions = monthly_contribution * months.max(1) as f64;
    let final_balance = target.max(future_value_of_current);

    SavingsGoalResult {
        monthly_contribution,
        total_contributions,
        interest_earned: (final_balance - current - total_contributions).max(0.0),
        future_value_of_current,
    }
}

/// Months of saving `monthly_contribution` until the balance reaches `target`
pub fn months_to_goal(
    target: f64,
    current_savings: f64,
    monthly_contribution: f64,
    annual_rate: f64,
) -> GoalTimeline {
    let rate = monthly_rate(annual_rate);
    let contribution = non_negative(monthly_contribution);
    let mut balance = non_negative(current_savings);
    let mut months = 0;

    while balance < target && months < MAX_PAYOFF_MONTHS {
        months += 1;
        balance = balance * (1.0 + rate) + contribution;
    }

    GoalTimeline {
        months,
        reached: balance >= target,
        final_balance: balance,
    }
}
