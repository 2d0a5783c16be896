//! Configuration module for fincalc
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (currency, output format, calculator defaults)

pub mod paths;
pub mod settings;

pub use paths::FincalcPaths;
pub use settings::{is_valid_date_format, OutputFormat, Settings, DEFAULT_DATE_FORMAT};
