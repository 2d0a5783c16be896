//! User settings for fincalc
//!
//! Manages user preferences: currency symbol, preferred output format,
//! whether calculations are recorded to the history log, and the defaults
//! applied when a calculator option is left out on the command line.

use chrono::format::{Item, StrftimeItems};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::FincalcPaths;
use crate::error::FincalcError;
use crate::finance::compound::CompoundingFrequency;
use crate::finance::tax::FilingStatus;

/// How calculation results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML with a comment header
    Yaml,
}

/// User settings for fincalc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether each calculation is appended to the history log
    #[serde(default = "default_record_history")]
    pub record_history: bool,

    /// Compounding frequency for the compound interest calculator
    #[serde(default)]
    pub default_compounding: CompoundingFrequency,

    /// Safe withdrawal rate (percent) for FIRE and retirement income
    #[serde(default = "default_withdrawal_rate")]
    pub default_withdrawal_rate: f64,

    /// Working hours per week for salary conversion
    #[serde(default = "default_hours_per_week")]
    pub hours_per_week: f64,

    /// Filing status for the income tax calculator
    #[serde(default)]
    pub filing_status: FilingStatus,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_record_history() -> bool {
    true
}

fn default_withdrawal_rate() -> f64 {
    4.0
}

fn default_hours_per_week() -> f64 {
    40.0
}

/// Date format used when none is configured or the configured one is invalid
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Check that every strftime specifier in `format` is one chrono understands
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            output_format: OutputFormat::default(),
            record_history: default_record_history(),
            default_compounding: CompoundingFrequency::default(),
            default_withdrawal_rate: default_withdrawal_rate(),
            hours_per_week: default_hours_per_week(),
            filing_status: FilingStatus::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FincalcPaths) -> Result<Self, FincalcError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FincalcError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FincalcError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject values that would fail later, when they are used
    pub fn validate(&self) -> Result<(), FincalcError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(FincalcError::Config(format!(
                "Invalid date_format '{}' in settings",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FincalcPaths) -> Result<(), FincalcError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FincalcError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FincalcError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
