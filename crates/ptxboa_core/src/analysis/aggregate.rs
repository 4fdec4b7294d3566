//! Pivot long-form sweep results into per-value cost tables.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::model::Parameter;

use super::{AggregateOptions, SweepResult};

/// Name of the derived sum column
pub const TOTAL_COLUMN: &str = "Total";

/// One row of an [`AggregatedCostTable`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    /// The swept value this row belongs to
    pub index: String,
    /// Category values aligned with the table's columns
    pub cells: Vec<f64>,
    pub total: f64,
}

impl AggregatedRow {
    /// Sum of the category cells
    pub fn recomputed_total(&self) -> f64 {
        self.cells.iter().sum()
    }
}

/// Wide cost table: one row per swept value, one column per cost category.
///
/// Built once per sweep and never modified; ranking helpers return new tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedCostTable {
    parameter: Parameter,
    columns: Vec<String>,
    rows: Vec<AggregatedRow>,
    /// Swept values removed by the zero-total policy
    dropped: Vec<String>,
}

impl AggregatedCostTable {
    /// The swept parameter used as index
    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    /// Category column names, excluding the total
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[AggregatedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index values removed because their total was zero
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn index(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.index.as_str()).collect()
    }

    pub fn row(&self, index: &str) -> Option<&AggregatedRow> {
        self.rows.iter().find(|r| r.index == index)
    }

    /// Cell lookup; the `Total` column resolves to the row total
    pub fn value(&self, index: &str, column: &str) -> Option<f64> {
        let row = self.row(index)?;
        if column == TOTAL_COLUMN {
            return Some(row.total);
        }
        let position = self.columns.iter().position(|c| c == column)?;
        row.cells.get(position).copied()
    }

    pub fn totals(&self) -> Vec<(&str, f64)> {
        self.rows
            .iter()
            .map(|r| (r.index.as_str(), r.total))
            .collect()
    }

    /// Same columns, different rows
    pub(crate) fn with_rows(&self, rows: Vec<AggregatedRow>) -> Self {
        Self {
            parameter: self.parameter,
            columns: self.columns.clone(),
            rows,
            dropped: self.dropped.clone(),
        }
    }
}

/// Pivot a sweep into an [`AggregatedCostTable`].
///
/// Levelized-cost items are excluded, items sharing an index/category pair are
/// summed, and categories missing for a value count as zero. Row order follows
/// the sweep's value order; column order follows first appearance.
///
/// With `drop_zero_totals` set, rows whose total is exactly zero are removed.
/// This hides values without a feasible supply chain but would also hide a
/// genuinely zero-cost configuration; [`AggregatedCostTable::dropped`] lists
/// what was hidden.
pub fn aggregate(sweep: &SweepResult, options: &AggregateOptions) -> AggregatedCostTable {
    let mut columns: Vec<String> = Vec::new();
    let mut column_positions: FxHashMap<&str, usize> = FxHashMap::default();
    let mut row_positions: FxHashMap<&str, usize> = FxHashMap::default();
    let mut pivot: Vec<(String, Vec<f64>)> = Vec::new();

    // Every requested value gets a row, even if its calculation returned nothing
    for value in sweep.values() {
        if !row_positions.contains_key(value.as_str()) {
            row_positions.insert(value.as_str(), pivot.len());
            pivot.push((value.clone(), Vec::new()));
        }
    }

    for row in sweep.rows() {
        if row.cost.is_levelized() {
            continue;
        }
        let category = options.category.of(&row.cost);
        let column = *column_positions.entry(category).or_insert_with(|| {
            columns.push(category.to_string());
            columns.len() - 1
        });
        let position = *row_positions
            .entry(row.swept_value.as_str())
            .or_insert_with(|| {
                pivot.push((row.swept_value.clone(), Vec::new()));
                pivot.len() - 1
            });

        let cells = &mut pivot[position].1;
        if cells.len() <= column {
            cells.resize(column + 1, 0.0);
        }
        cells[column] += row.cost.value;
    }

    let mut rows = Vec::with_capacity(pivot.len());
    let mut dropped = Vec::new();
    for (index, mut cells) in pivot {
        cells.resize(columns.len(), 0.0);
        let total: f64 = cells.iter().sum();
        if options.drop_zero_totals && total == 0.0 {
            dropped.push(index);
        } else {
            rows.push(AggregatedRow {
                index,
                cells,
                total,
            });
        }
    }

    if !dropped.is_empty() {
        tracing::info!(
            parameter = %sweep.parameter(),
            dropped = dropped.len(),
            "Dropped zero-total rows from cost table"
        );
    }

    AggregatedCostTable {
        parameter: sweep.parameter(),
        columns,
        rows,
        dropped,
    }
}
