//! Net worth statement

use serde::{Deserialize, Serialize};

use super::non_negative;

/// A named asset or liability value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthResult {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    /// Liabilities as a percent of assets; 0 when there are no assets
    pub debt_to_asset_ratio: f64,
}

/// Sum assets and liabilities into a net worth figure
///
/// Negative line amounts are treated as zero.
pub fn calculate_net_worth(assets: &[LineItem], liabilities: &[LineItem]) -> NetWorthResult {
    let total_assets: f64 = assets.iter().map(|item| non_negative(item.amount)).sum();
    let total_liabilities: f64 = liabilities.iter().map(|item| non_negative(item.amount)).sum();

    let debt_to_asset_ratio = if total_assets > 0.0 {
        total_liabilities / total_assets * 100.0
    } else {
        0.0
    };

    NetWorthResult {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        debt_to_asset_ratio,
    }
}
