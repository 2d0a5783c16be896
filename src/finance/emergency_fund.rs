//! Emergency fund sizing

use serde::{Deserialize, Serialize};

use super::non_negative;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    pub target: f64,
    pub shortfall: f64,
    /// Share of the target already saved, capped at 100
    pub percent_funded: f64,
    pub months_to_goal: u32,
    /// False when there is a shortfall and nothing is being contributed
    pub reachable: bool,
}

/// Size an emergency fund covering `months_of_coverage` months of expenses
///
/// Contributions are assumed to sit in cash and earn nothing.
pub fn calculate_emergency_fund(
    monthly_expenses: f64,
    months_of_coverage: f64,
    current_savings: f64,
    monthly_contribution: f64,
) -> EmergencyFundResult {
    let target = non_negative(monthly_expenses) * non_negative(months_of_coverage);
    let current = non_negative(current_savings);
    let contribution = non_negative(monthly_contribution);
    let shortfall = (target - current).max(0.0);

    let percent_funded = if target > 0.0 {
        (current / target * 100.0).min(100.0)
    } else {
        100.0
    };

    let (months_to_goal, reachable) = if shortfall == 0.0 {
        (0, true)
    } else if contribution == 0.0 {
        (0, false)
    } else {
        ((shortfall / contribution).ceil().min(u32::MAX as f64) as u32, true)
    };

    EmergencyFundResult {
        target,
        shortfall,
        percent_funded,
        months_to_goal,
        reachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_fund() {
        let result = calculate_emergency_fund(3_000.0, 6.0, 4_500.0, 500.0);
        assert_eq!(result.target, 18_000.0);
        assert_eq!(result.shortfall, 13_500.0);
        assert_eq!(result.percent_funded, 25.0);
        assert_eq!(result.months_to_goal, 27);
        assert!(result.reachable);
    }

    #[test]
    fn test_fully_funded() {
        let result = calculate_emergency_fund(2_000.0, 3.0, 10_000.0, 0.0);
        assert_eq!(result.shortfall, 0.0);
        assert_eq!(result.percent_funded, 100.0);
        assert_eq!(result.months_to_goal, 0);
        assert!(result.reachable);
    }

    #[test]
    fn test_no_contribution_is_unreachable() {
        let result = calculate_emergency_fund(2_000.0, 3.0, 1_000.0, 0.0);
        assert!(!result.reachable);
    }

    #[test]
    fn test_partial_month_rounds_up() {
        let result = calculate_emergency_fund(1_000.0, 3.0, 0.0, 700.0);
        assert_eq!(result.months_to_goal, 5);
    }
}
