//! Financial independence (FIRE) target and timeline

use serde::{Deserialize, Serialize};

use super::MAX_PROJECTION_YEARS;

/// Withdrawal rate used when none (or a non-positive one) is given
pub const DEFAULT_WITHDRAWAL_RATE: f64 = 4.0;

const LEAN_FIRE_FACTOR: f64 = 0.7;
const FAT_FIRE_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireInput {
    pub annual_expenses: f64,
    /// Safe withdrawal rate, percent
    pub withdrawal_rate: f64,
    pub current_net_worth: f64,
    pub annual_savings: f64,
    /// Expected annual return, percent
    pub annual_return: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireYear {
    pub year: u32,
    pub net_worth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireResult {
    pub fire_number: f64,
    pub lean_fire_number: f64,
    pub fat_fire_number: f64,
    pub years_to_fire: u32,
    pub reached: bool,
    /// Net worth at the end of the projection
    pub projected_net_worth: f64,
    /// Starts with year 0 (today)
    pub yearly_progress: Vec<FireYear>,
}

/// Calculate the FIRE number and how many years of saving it takes to get there
///
/// Each year `net_worth = net_worth * (1 + return) + annual_savings`. Without
/// positive savings a shortfall is treated as unreachable and the projection
/// runs the full [`MAX_PROJECTION_YEARS`].
pub fn calculate_fire(input: &FireInput) -> FireResult {
    let withdrawal_rate = if input.withdrawal_rate > 0.0 {
        input.withdrawal_rate
    } else {
        DEFAULT_WITHDRAWAL_RATE
    };
    let fire_number = input.annual_expenses.max(0.0) / (withdrawal_rate / 100.0);
    let growth = 1.0 + input.annual_return / 100.0;
    let saving = input.annual_savings > 0.0;

    let mut net_worth = input.current_net_worth;
    let mut year = 0;
    let mut yearly_progress = vec![FireYear { year, net_worth }];

    let mut reached = net_worth >= fire_number;
    if !reached {
        while year < MAX_PROJECTION_YEARS {
            year += 1;
            net_worth = net_worth * growth + input.annual_savings;
            yearly_progress.push(FireYear { year, net_worth });

            if saving && net_worth >= fire_number {
                reached = true;
                break;
            }
        }
    }

    FireResult {
        fire_number,
        lean_fire_number: fire_number * LEAN_FIRE_FACTOR,
        fat_fire_number: fire_number * FAT_FIRE_FACTOR,
        years_to_fire: year,
        reached,
        projected_net_worth: net_worth,
        yearly_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> FireInput {
        FireInput {
            annual_expenses: 40_000.0,
            withdrawal_rate: 4.0,
            current_net_worth: 100_000.0,
            annual_savings: 50_000.0,
            annual_return: 7.0,
        }
    }

    #[test]
    fn test_fire_number() {
        let result = calculate_fire(&base());
        assert!((result.fire_number - 1_000_000.0).abs() < 1e-6);
        assert!((result.lean_fire_number - 700_000.0).abs() < 1e-6);
        assert!((result.fat_fire_number - 1_500_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_years_to_fire() {
        let result = calculate_fire(&base());
        assert!(result.reached);
        assert_eq!(result.years_to_fire, 12);
        assert!(result.projected_net_worth >= result.fire_number);
        assert!(result.yearly_progress[11].net_worth < result.fire_number);
        assert_eq!(result.yearly_progress.len(), 13);
    }

    #[test]
    fn test_already_independent() {
        let result = calculate_fire(&FireInput {
            current_net_worth: 2_000_000.0,
            ..base()
        });
        assert!(result.reached);
        assert_eq!(result.years_to_fire, 0);
        assert_eq!(result.yearly_progress.len(), 1);
    }

    #[test]
    fn test_no_savings_runs_to_cap() {
        for savings in [0.0, -5_000.0] {
            let result = calculate_fire(&FireInput {
                annual_savings: savings,
                ..base()
            });
            assert!(!result.reached);
            assert_eq!(result.years_to_fire, MAX_PROJECTION_YEARS);
            assert_eq!(result.yearly_progress.len(), MAX_PROJECTION_YEARS as usize + 1);
        }
    }

    #[test]
    fn test_non_positive_withdrawal_rate_uses_default() {
        let result = calculate_fire(&FireInput {
            withdrawal_rate: 0.0,
            ..base()
        });
        assert!((result.fire_number - 1_000_000.0).abs() < 1e-6);
    }
}
