//! Display formatting for terminal output
//!
//! Provides the summary tables printed for single-figure results and the
//! formatting helpers the schedule reports share.

pub mod calculators;
pub mod report;
pub mod summary;

pub use report::{
    double_separator, format_amount, format_bar, format_duration, format_percentage, separator,
    truncate,
};
pub use summary::{format_summary, Figure, FigureUnit, Summary, SummaryRow};
