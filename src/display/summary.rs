//! Key/value result tables
//!
//! Every calculator result that is not a schedule renders as a two-column
//! table of labelled figures. Results opt in by implementing [`Summary`].

use serde::{Deserialize, Serialize};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use super::report::{format_amount, format_percentage};

/// A labelled figure in a summary table
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Metric")]
    pub label: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl SummaryRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn amount(label: impl Into<String>, value: f64, symbol: &str) -> Self {
        Self::new(label, format_amount(value, symbol))
    }

    pub fn percent(label: impl Into<String>, value: f64) -> Self {
        Self::new(label, format_percentage(value))
    }
}

/// A calculator result that can be shown as a summary table
pub trait Summary {
    /// One line describing the headline figure, used in the history log
    fn headline(&self, symbol: &str) -> String;

    /// Labelled figures, most important first
    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow>;
}

/// How a bare number should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureUnit {
    Currency,
    Percent,
}

/// A calculator result that is a single number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub label: String,
    pub value: f64,
    pub unit: FigureUnit,
}

impl Figure {
    pub fn currency(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            unit: FigureUnit::Currency,
        }
    }

    pub fn percent(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            unit: FigureUnit::Percent,
        }
    }

    fn formatted(&self, symbol: &str) -> String {
        match self.unit {
            FigureUnit::Currency => format_amount(self.value, symbol),
            FigureUnit::Percent => format_percentage(self.value),
        }
    }
}

impl Summary for Figure {
    fn headline(&self, symbol: &str) -> String {
        format!("{} {}", self.label, self.formatted(symbol))
    }

    fn summary_rows(&self, symbol: &str) -> Vec<SummaryRow> {
        vec![SummaryRow::new(self.label.clone(), self.formatted(symbol))]
    }
}

/// Render a result as a titled two-column table
pub fn format_summary(title: &str, summary: &dyn Summary, symbol: &str) -> String {
    let rows = summary.summary_rows(symbol);

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string();

    format!("{}\n{}\n", title, table)
}
