//! Rendered view output.
//!
//! Views build a [`Report`]; [`render`] turns it into aligned text, JSON or
//! YAML.

use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use ptxboa_core::AggregatedCostTable;
use ptxboa_core::analysis::TOTAL_COLUMN;
use serde::Serialize;

use crate::format::{format_cost, render_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// A table cell: numbers stay numeric in JSON and YAML
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(v) => format_cost(*v),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Text {
        heading: String,
        body: String,
    },
    Table {
        heading: String,
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        footnote: Option<String>,
    },
    Notice {
        message: String,
    },
}

impl Section {
    pub fn text(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Section::Text {
            heading: heading.into(),
            body: body.into(),
        }
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Section::Notice {
            message: message.into(),
        }
    }

    /// A cost table with its category columns and the total.
    ///
    /// Values hidden by the zero-total policy are mentioned in a footnote.
    pub fn cost_table(heading: impl Into<String>, table: &AggregatedCostTable) -> Self {
        let mut headers = vec![table.parameter().label().to_string()];
        headers.extend(table.columns().iter().cloned());
        headers.push(TOTAL_COLUMN.to_string());

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                let mut cells = vec![Cell::from(row.index.as_str())];
                cells.extend(row.cells.iter().copied().map(Cell::Number));
                cells.push(Cell::Number(row.total));
                cells
            })
            .collect();

        let footnote = match table.dropped() {
            [] => None,
            dropped => Some(format!(
                "{} {} without a feasible supply chain hidden: {}",
                dropped.len(),
                if dropped.len() == 1 { "entry" } else { "entries" },
                dropped.join(", ")
            )),
        };

        Section::Table {
            heading: heading.into(),
            headers,
            rows,
            footnote,
        }
    }
}

/// Output of one view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    #[must_use]
    pub fn with(mut self, section: Section) -> Self {
        self.push(section);
        self
    }
}

pub fn render(report: &Report, format: OutputFormat) -> color_eyre::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).wrap_err("Failed to serialize report as JSON")
        }
        OutputFormat::Yaml => {
            serde_saphyr::to_string(report).wrap_err("Failed to serialize report as YAML")
        }
    }
}

fn render_text(report: &Report) -> String {
    let mut out = vec![report.title.clone(), "=".repeat(report.title.chars().count())];

    for section in &report.sections {
        out.push(String::new());
        match section {
            Section::Text { heading, body } => {
                out.push(heading.clone());
                out.push("-".repeat(heading.chars().count()));
                out.push(body.clone());
            }
            Section::Table {
                heading,
                headers,
                rows,
                footnote,
            } => {
                out.push(heading.clone());
                out.push(String::new());
                let text_rows: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| row.iter().map(Cell::to_text).collect())
                    .collect();
                out.push(render_table(headers, &text_rows));
                if let Some(footnote) = footnote {
                    out.push(format!("* {footnote}"));
                }
            }
            Section::Notice { message } => out.push(format!("Note: {message}")),
        }
    }

    out.join("\n")
}
