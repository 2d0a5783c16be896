//! Debt list import
//!
//! Debts for the payoff planner come either from repeated
//! `--debt name:balance:rate:minimum` arguments or from a CSV file.

pub mod debts;

pub use debts::{import_debts_file, parse_debt_spec, parse_debts_from_reader, DebtColumns};
