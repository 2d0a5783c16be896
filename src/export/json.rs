//! JSON export of a single calculation

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FincalcError, FincalcResult};
use crate::history::CalculatorKind;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A calculation packaged for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Calculator that produced the result
    pub calculator: CalculatorKind,

    /// Inputs exactly as the calculator received them
    pub inputs: serde_json::Value,

    /// Full result record
    pub result: serde_json::Value,
}

impl CalculationExport {
    /// Package inputs and result for export
    pub fn new<I: Serialize, R: Serialize>(
        calculator: CalculatorKind,
        inputs: &I,
        result: &R,
    ) -> FincalcResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            calculator,
            inputs: serde_json::to_value(inputs)
                .map_err(|e| FincalcError::Export(e.to_string()))?,
            result: serde_json::to_value(result)
                .map_err(|e| FincalcError::Export(e.to_string()))?,
        })
    }
}

/// Export a calculation to JSON
pub fn export_json<W: Write>(
    export: &CalculationExport,
    writer: &mut W,
    pretty: bool,
) -> FincalcResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| FincalcError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FincalcError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::calculate_loan_payment;
    use serde_json::json;

    #[test]
    fn test_new_export() {
        let inputs = json!({"principal": 25000.0, "annual_rate": 6.0, "years": 5.0});
        let result = calculate_loan_payment(25_000.0, 6.0, 5.0);
        let export = CalculationExport::new(CalculatorKind::Loan, &inputs, &result).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(export.inputs["years"], 5.0);
        assert!(export.result["monthly_payment"].as_f64().unwrap() > 483.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let export =
            CalculationExport::new(CalculatorKind::Cagr, &json!({"years": 5}), &json!(7.5)).unwrap();

        let mut json_output = Vec::new();
        export_json(&export, &mut json_output, true).unwrap();

        let json_string = String::from_utf8(json_output).unwrap();
        assert!(json_string.contains("\"calculator\": \"cagr\""));

        let imported: CalculationExport = serde_json::from_str(&json_string).unwrap();
        assert_eq!(imported.calculator, CalculatorKind::Cagr);
        assert_eq!(imported.result, json!(7.5));
    }

    #[test]
    fn test_compact_output_is_one_line() {
        let export = CalculationExport::new(CalculatorKind::Roi, &json!({}), &json!({})).unwrap();

        let mut output = Vec::new();
        export_json(&export, &mut output, false).unwrap();

        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
