//! Calculation history for fincalc
//!
//! Every calculation run from the command line is appended to a
//! line-delimited JSON log (JSONL) so past results can be listed later.
//!
//! - `HistoryEntry`: one recorded calculation with its inputs and a short
//!   summary of the result.
//! - `HistoryLogger`: appends entries to the log and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use fincalc::history::{CalculatorKind, HistoryEntry, HistoryLogger};
//!
//! let logger = HistoryLogger::new(paths.history_log());
//! let entry = HistoryEntry::new(CalculatorKind::Loan, &inputs, "Monthly payment $483.32");
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{CalculatorKind, HistoryEntry};
pub use logger::HistoryLogger;
