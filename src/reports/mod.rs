//! Reports module for fincalc
//!
//! Schedule-style results that are too long for a summary table: loan
//! amortization, debt payoff plans and multi-year projections. Each report
//! renders for the terminal and exports to CSV.

pub mod amortization;
pub mod debt_payoff;
pub mod projection;

pub use amortization::{AmortizationReport, YearTotals};
pub use debt_payoff::DebtPayoffReport;
pub use projection::{ProjectionReport, ProjectionRow};

use crate::error::FincalcError;

/// Wrap a writer failure as an export error
pub(crate) fn export_error<E: std::fmt::Display>(e: E) -> FincalcError {
    FincalcError::Export(e.to_string())
}
