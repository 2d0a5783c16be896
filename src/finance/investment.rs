//! Investment return measures: CAGR, ROI and doubling time

use serde::{Deserialize, Serialize};

/// Return on investment summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub net_profit: f64,
    pub roi_percent: f64,
    /// Geometric annual return; zero when no holding period is given
    pub annualized_roi_percent: f64,
}

/// Doubling time at a fixed annual rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOf72Result {
    /// The 72 / rate shortcut
    pub estimated_years: f64,
    /// ln(2) / ln(1 + rate)
    pub exact_years: f64,
}

/// Compound annual growth rate, as a percent
///
/// ```
/// use fincalc::finance::calculate_cagr;
///
/// let cagr = calculate_cagr(10_000.0, 20_000.0, 5.0);
/// assert!((cagr - 14.87).abs() < 0.01);
/// ```
pub fn calculate_cagr(beginning_value: f64, ending_value: f64, years: f64) -> f64 {
    if !(beginning_value > 0.0) || !(years > 0.0) || ending_value < 0.0 {
        return 0.0;
    }

    ((ending_value / beginning_value).powf(1.0 / years) - 1.0) * 100.0
}

/// Net profit, simple ROI, and annualized ROI over `years`
pub fn calculate_roi(amount_invested: f64, amount_returned: f64, years: f64) -> RoiResult {
    let net_profit = amount_returned - amount_invested;

    let roi_percent = if amount_invested > 0.0 {
        net_profit / amount_invested * 100.0
    } else {
        0.0
    };

    RoiResult {
        net_profit,
        roi_percent,
        annualized_roi_percent: calculate_cagr(amount_invested, amount_returned, years),
    }
}

/// Years for money to double at `annual_rate` percent
pub fn rule_of_72(annual_rate: f64) -> RuleOf72Result {
    if !(annual_rate > 0.0) {
        return RuleOf72Result {
            estimated_years: 0.0,
            exact_years: 0.0,
        };
    }

    RuleOf72Result {
        estimated_years: 72.0 / annual_rate,
        exact_years: 2f64.ln() / (1.0 + annual_rate / 100.0).ln(),
    }
}
