//! YAML export of a single calculation

use std::io::Write;

use crate::error::{FincalcError, FincalcResult};
use crate::export::json::CalculationExport;

/// Export a calculation to YAML with a comment header
pub fn export_yaml<W: Write>(export: &CalculationExport, writer: &mut W) -> FincalcResult<()> {
    let header = format!(
        "# fincalc {} calculation\n# Generated: {}\n# App Version: {}\n\n",
        export.calculator, export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FincalcError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| FincalcError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::{calculate_fire, FireInput};
    use crate::history::CalculatorKind;

    fn fire_export() -> CalculationExport {
        let input = FireInput {
            annual_expenses: 40_000.0,
            withdrawal_rate: 4.0,
            current_net_worth: 100_000.0,
            annual_savings: 50_000.0,
            annual_return: 7.0,
        };
        let result = calculate_fire(&input);
        CalculationExport::new(CalculatorKind::Fire, &input, &result).unwrap()
    }

    #[test]
    fn test_yaml_export() {
        let mut yaml_output = Vec::new();
        export_yaml(&fire_export(), &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();
        assert!(yaml_string.starts_with("# fincalc FIRE calculation"));
        assert!(yaml_string.contains("calculator: fire"));
        assert!(yaml_string.contains("fire_number:"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut yaml_output = Vec::new();
        export_yaml(&fire_export(), &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();
        let imported: CalculationExport = serde_yaml::from_str(&yaml_string).unwrap();

        assert_eq!(imported.calculator, CalculatorKind::Fire);
        assert_eq!(imported.inputs["annual_savings"], 50_000.0);
    }
}
