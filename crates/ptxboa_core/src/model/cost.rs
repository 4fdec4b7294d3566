use serde::{Deserialize, Serialize};

/// `cost_type` of levelized-cost line items, which carry a per-output unit
pub const LEVELIZED_COST: &str = "LC";

/// One cost line item returned by a single calculation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub region: String,
    pub cost_type: String,
    pub process_type: String,
    pub value: f64,
    pub unit: String,
}

impl CostResult {
    pub fn new(
        region: impl Into<String>,
        cost_type: impl Into<String>,
        process_type: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            cost_type: cost_type.into(),
            process_type: process_type.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Levelized costs must not be summed with absolute costs
    pub fn is_levelized(&self) -> bool {
        self.cost_type == LEVELIZED_COST
    }
}
