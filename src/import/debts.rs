//! Parse debts from CSV files and command-line specs
//!
//! CSV cells go through [`coerce_amount`], so a blank or malformed number
//! becomes 0 instead of aborting the import. Command-line specs are strict
//! and report the offending field.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, StringRecord};

use crate::error::{FincalcError, FincalcResult};
use crate::finance::Debt;
use crate::models::{coerce_amount, parse_amount, parse_percent};

/// Column positions of the debt fields in a CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtColumns {
    pub name: usize,
    pub balance: usize,
    pub rate: usize,
    pub minimum: usize,
}

impl Default for DebtColumns {
    /// `name,balance,rate,minimum`
    fn default() -> Self {
        Self {
            name: 0,
            balance: 1,
            rate: 2,
            minimum: 3,
        }
    }
}

impl DebtColumns {
    /// Detect column positions from a header record
    ///
    /// Unrecognized headers keep the default positions.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut columns = Self::default();

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();

            // Numeric columns first: "Debt Balance" is a balance, not a name
            if h.contains("balance") || h.contains("owed") || h.contains("principal") {
                columns.balance = idx;
            } else if h.contains("rate") || h.contains("apr") || h.contains("interest") {
                columns.rate = idx;
            } else if h.contains("min") || h.contains("payment") {
                columns.minimum = idx;
            } else if h.contains("name") || h.contains("debt") || h.contains("creditor") {
                columns.name = idx;
            }
        }

        columns
    }
}

/// Read debts from a CSV reader with a header row
pub fn parse_debts_from_reader<R: Read>(reader: &mut Reader<R>) -> FincalcResult<Vec<Debt>> {
    let columns = DebtColumns::from_headers(reader.headers()?);
    let mut debts = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            FincalcError::Import(format!("Error reading debt row {}: {}", idx + 2, e))
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let name = match field(columns.name) {
            "" => format!("Debt {}", debts.len() + 1),
            name => name.to_string(),
        };

        debts.push(Debt::new(
            name,
            coerce_amount(field(columns.balance)),
            coerce_amount(field(columns.rate)),
            coerce_amount(field(columns.minimum)),
        ));
    }

    Ok(debts)
}

/// Read debts from a CSV file on disk
pub fn import_debts_file(path: &Path) -> FincalcResult<Vec<Debt>> {
    let file = File::open(path).map_err(|e| {
        FincalcError::Import(format!("Failed to open '{}': {}", path.display(), e))
    })?;

    let mut reader = Reader::from_reader(file);
    parse_debts_from_reader(&mut reader)
}

/// Parse a `name:balance:rate:minimum` debt argument
///
/// The name may itself contain colons; the last three fields are numeric.
pub fn parse_debt_spec(spec: &str) -> FincalcResult<Debt> {
    let mut parts = spec.rsplitn(4, ':');
    let minimum = parts.next();
    let rate = parts.next();
    let balance = parts.next();
    let name = parts.next();

    let (Some(name), Some(balance), Some(rate), Some(minimum)) = (name, balance, rate, minimum)
    else {
        return Err(FincalcError::invalid_argument(
            "debt",
            spec,
            "name:balance:rate:minimum",
        ));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(FincalcError::invalid_argument("debt", spec, "a non-empty name"));
    }

    let balance = parse_amount(balance)
        .map_err(|_| FincalcError::invalid_argument("debt balance", balance, "an amount"))?;
    let rate = parse_percent(rate)
        .map_err(|_| FincalcError::invalid_argument("debt rate", rate, "a percentage"))?;
    let minimum = parse_amount(minimum)
        .map_err(|_| FincalcError::invalid_argument("minimum payment", minimum, "an amount"))?;

    Ok(Debt::new(name, balance, rate, minimum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_simple_csv() {
        let csv_data = "name,balance,rate,minimum\n\
                        Visa,5000,22.9,150\n\
                        Car Loan,\"12,000\",6,300\n";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let debts = parse_debts_from_reader(&mut reader).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0], Debt::new("Visa", 5_000.0, 22.9, 150.0));
        assert_eq!(debts[1].balance, 12_000.0);
    }

    #[test]
    fn test_detects_reordered_columns() {
        let csv_data = "APR,Minimum Payment,Creditor,Balance Owed\n\
                        19.99%,$40,Store Card,\"$1,250.00\"\n";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let debts = parse_debts_from_reader(&mut reader).unwrap();

        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].name, "Store Card");
        assert_eq!(debts[0].annual_rate, 19.99);
        assert_eq!(debts[0].minimum_payment, 40.0);
    }

    #[test]
    fn test_debt_balance_header_is_not_a_name() {
        let csv_data = "Creditor,Debt Balance,APR,Minimum\n\
                        Chase,4200,24.99,120\n";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());

        let columns = DebtColumns::from_headers(reader.headers().unwrap());
        assert_eq!(columns, DebtColumns::default());

        let debts = parse_debts_from_reader(&mut reader).unwrap();
        assert_eq!(debts, vec![Debt::new("Chase", 4_200.0, 24.99, 120.0)]);
    }

    #[test]
    fn test_blank_cells_become_zero() {
        let csv_data = "name,balance,rate,minimum\n\
                        ,800,,abc\n\
                        ,,,\n";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let debts = parse_debts_from_reader(&mut reader).unwrap();

        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].name, "Debt 1");
        assert_eq!(debts[0].balance, 800.0);
        assert_eq!(debts[0].annual_rate, 0.0);
        assert_eq!(debts[0].minimum_payment, 0.0);
    }

    #[test]
    fn test_import_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name,balance,rate,minimum").unwrap();
        writeln!(file, "Medical,600,0,50").unwrap();

        let debts = import_debts_file(file.path()).unwrap();
        assert_eq!(debts, vec![Debt::new("Medical", 600.0, 0.0, 50.0)]);
    }

    #[test]
    fn test_missing_file() {
        let err = import_debts_file(Path::new("/nonexistent/debts.csv")).unwrap_err();
        assert!(matches!(err, FincalcError::Import(_)));
    }

    #[test]
    fn test_parse_debt_spec() {
        let debt = parse_debt_spec("Visa:5000:22.9:150").unwrap();
        assert_eq!(debt, Debt::new("Visa", 5_000.0, 22.9, 150.0));

        let debt = parse_debt_spec("Loan: Car:12000:6%:300").unwrap();
        assert_eq!(debt.name, "Loan: Car");
        assert_eq!(debt.annual_rate, 6.0);
    }

    #[test]
    fn test_parse_debt_spec_errors() {
        assert!(parse_debt_spec("Visa:5000:22.9").unwrap_err().is_validation());
        assert!(parse_debt_spec(":5000:22.9:150").unwrap_err().is_validation());
        assert!(parse_debt_spec("Visa:lots:22.9:150").unwrap_err().is_validation());
    }
}
