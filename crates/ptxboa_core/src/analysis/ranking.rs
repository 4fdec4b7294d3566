//! Selection and ranking over aggregated cost tables.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{AggregatedCostTable, AggregatedRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl AggregatedCostTable {
    /// Stable sort on the total; rows with equal totals keep their order
    #[must_use]
    pub fn sort_by_total(&self, order: SortOrder) -> AggregatedCostTable {
        let mut rows: Vec<AggregatedRow> = self.rows().to_vec();
        rows.sort_by(|a, b| compare_totals(a, b, order));
        self.with_rows(rows)
    }

    /// The `n` rows with the smallest totals, cheapest first
    #[must_use]
    pub fn cheapest(&self, n: usize) -> AggregatedCostTable {
        let mut rows: Vec<AggregatedRow> = self.rows().to_vec();
        rows.sort_by(|a, b| compare_totals(a, b, SortOrder::Ascending));
        rows.truncate(n);
        self.with_rows(rows)
    }

    /// Exactly the rows whose index is in `indices`, in table order.
    ///
    /// Unknown index values are ignored.
    #[must_use]
    pub fn select<S: AsRef<str>>(&self, indices: &[S]) -> AggregatedCostTable {
        let wanted: FxHashSet<&str> = indices.iter().map(|s| s.as_ref()).collect();
        let rows = self
            .rows()
            .iter()
            .filter(|r| wanted.contains(r.index.as_str()))
            .cloned()
            .collect();
        self.with_rows(rows)
    }
}

fn compare_totals(a: &AggregatedRow, b: &AggregatedRow, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => a.total.total_cmp(&b.total),
        SortOrder::Descending => b.total.total_cmp(&a.total),
    }
}
