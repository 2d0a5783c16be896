//! Inflation: future cost and lost purchasing power

use serde::{Deserialize, Serialize};

use super::non_negative;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationResult {
    /// What today's `amount` of goods will cost after `years`
    pub future_cost: f64,
    /// What today's `amount` of cash will buy after `years`, in today's money
    pub purchasing_power: f64,
    pub cumulative_inflation_percent: f64,
}

/// Project the effect of a constant annual inflation rate
pub fn calculate_inflation(amount: f64, annual_rate: f64, years: f64) -> InflationResult {
    let years = non_negative(years);
    let factor = (1.0 + annual_rate / 100.0).powf(years);

    let purchasing_power = if factor > 0.0 { amount / factor } else { 0.0 };

    InflationResult {
        future_cost: amount * factor,
        purchasing_power,
        cumulative_inflation_percent: (factor - 1.0) * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflation() {
        let result = calculate_inflation(100.0, 3.0, 10.0);
        assert!((result.future_cost - 134.39).abs() < 0.01);
        assert!((result.purchasing_power - 74.41).abs() < 0.01);
        assert!((result.cumulative_inflation_percent - 34.39).abs() < 0.01);
    }

    #[test]
    fn test_no_time_no_change() {
        let result = calculate_inflation(100.0, 3.0, 0.0);
        assert_eq!(result.future_cost, 100.0);
        assert_eq!(result.purchasing_power, 100.0);
        assert_eq!(result.cumulative_inflation_percent, 0.0);
    }
}
