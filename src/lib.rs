//! fincalc - Terminal financial calculators
//!
//! Loan and mortgage payments, interest growth, savings goals, debt payoff
//! strategies, retirement and FIRE projections, budgets and income tax, all
//! from the command line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `finance`: Pure calculators (numbers in, result records out)
//! - `models`: Money values and argument parsing
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `display`: Summary tables and terminal formatting helpers
//! - `reports`: Schedule and projection reports with CSV export
//! - `export`: JSON and YAML result export
//! - `import`: Debt lists from CSV
//! - `history`: Calculation history log
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use fincalc::finance::calculate_loan_payment;
//!
//! let loan = calculate_loan_payment(25_000.0, 6.0, 5.0);
//! assert!((loan.monthly_payment - 483.32).abs() < 0.01);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod finance;
pub mod history;
pub mod import;
pub mod models;
pub mod reports;

pub use error::{FincalcError, FincalcResult};
