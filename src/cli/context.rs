//! Shared state and output handling for CLI commands
//!
//! Every calculator command ends the same way: record the run in the history
//! log (when enabled), then print the result in the selected format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::{FincalcPaths, OutputFormat, Settings};
use crate::display::{format_summary, Summary};
use crate::error::{FincalcError, FincalcResult};
use crate::export::{export_json, export_yaml, CalculationExport};
use crate::history::{CalculatorKind, HistoryEntry, HistoryLogger};

/// Paths, settings and the output format for one invocation
pub struct Context {
    pub paths: FincalcPaths,
    pub settings: Settings,
    pub format: OutputFormat,
}

impl Context {
    /// `format` overrides the configured output format when given
    pub fn new(paths: FincalcPaths, settings: Settings, format: Option<OutputFormat>) -> Self {
        let format = format.unwrap_or(settings.output_format);
        Self {
            paths,
            settings,
            format,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }

    pub fn history(&self) -> HistoryLogger {
        HistoryLogger::new(self.paths.history_log())
    }

    /// Append a calculation to the history log if recording is enabled
    pub fn record<I: Serialize>(
        &self,
        calculator: CalculatorKind,
        inputs: &I,
        headline: String,
    ) -> FincalcResult<()> {
        if !self.settings.record_history {
            return Ok(());
        }
        self.history()
            .log(&HistoryEntry::new(calculator, inputs, headline))
    }

    /// Record a result and print it in the selected format
    ///
    /// Tables show the summary rows; JSON and YAML carry the inputs and the
    /// full result record.
    pub fn emit<I, R>(
        &self,
        calculator: CalculatorKind,
        title: &str,
        inputs: &I,
        result: &R,
    ) -> FincalcResult<()>
    where
        I: Serialize,
        R: Serialize + Summary,
    {
        self.record(calculator, inputs, result.headline(self.symbol()))?;

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.format {
            OutputFormat::Table => {
                write!(out, "{}", format_summary(title, result, self.symbol()))?;
            }
            OutputFormat::Json => {
                let export = CalculationExport::new(calculator, inputs, result)?;
                export_json(&export, &mut out, true)?;
            }
            OutputFormat::Yaml => {
                let export = CalculationExport::new(calculator, inputs, result)?;
                export_yaml(&export, &mut out)?;
            }
        }

        Ok(())
    }

    /// Print a schedule report below the summary when in table mode
    pub fn emit_report(&self, report: &str) {
        if self.is_table() {
            println!();
            print!("{}", report);
        }
    }

    /// Write a report to a CSV file through its `export_csv`
    pub fn write_csv<F>(&self, path: &Path, export: F) -> FincalcResult<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> FincalcResult<()>,
    {
        let file = File::create(path).map_err(|e| {
            FincalcError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export(&mut writer)?;
        writer
            .flush()
            .map_err(|e| FincalcError::Export(e.to_string()))?;

        eprintln!("Exported to: {}", path.display());
        Ok(())
    }
}
