//! Boundary models for fincalc
//!
//! Types that sit between user input/output and the calculation core.

pub mod input;
pub mod money;

pub use input::{coerce_amount, parse_amount, parse_percent};
pub use money::Money;
