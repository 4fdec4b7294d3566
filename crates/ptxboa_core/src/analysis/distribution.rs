//! Five-number summaries for regional distributions (box plots).

use serde::Serialize;

/// Standard quantiles shown in a box plot
pub mod standard {
    pub const Q1: f64 = 0.25;
    pub const MEDIAN: f64 = 0.50;
    pub const Q3: f64 = 0.75;
}

/// Box plot statistics of a set of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    /// Summarize `values`, ignoring NaN entries.
    ///
    /// Returns `None` when no finite value remains.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            count: sorted.len(),
            min: sorted[0],
            q1: quantile_sorted(&sorted, standard::Q1),
            median: quantile_sorted(&sorted, standard::MEDIAN),
            q3: quantile_sorted(&sorted, standard::Q3),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Inter-quartile range, shown next to the quartiles in deep-dive tables
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Quantile with linear interpolation between closest ranks.
///
/// `sorted` must be non-empty and ascending.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
