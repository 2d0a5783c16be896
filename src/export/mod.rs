//! Export module for fincalc
//!
//! Writes a calculation (inputs and full result) in machine-readable form:
//! - JSON: pretty-printed, for scripts and other tools
//! - YAML: with a comment header, for reading and archiving
//!
//! Schedules also export to CSV through the report types in `reports`.

pub mod json;
pub mod yaml;

pub use json::{export_json, CalculationExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
