//! Configuration types for sweeps and aggregation.

use serde::{Deserialize, Serialize};

use crate::model::{CostResult, Parameter, SettingsOverrides};

/// One parameter sweep: what to vary and over which values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRequest {
    /// The parameter to vary
    pub parameter: Parameter,
    /// Explicit ordered values; every dimension member when `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
    /// Values removed from the sweep
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    /// Settings forced for this sweep only
    #[serde(default, skip_serializing_if = "SettingsOverrides::is_empty")]
    pub overrides: SettingsOverrides,
}

impl SweepRequest {
    /// Sweep every member of the parameter's dimension
    pub fn new(parameter: Parameter) -> Self {
        Self {
            parameter,
            values: None,
            exclude: Vec::new(),
            overrides: SettingsOverrides::new(),
        }
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn excluding<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Get a descriptive label for display
    pub fn label(&self) -> String {
        if self.overrides.is_empty() {
            format!("Costs by {}", self.parameter.label())
        } else {
            let forced: Vec<String> = self
                .overrides
                .iter()
                .map(|(p, v)| format!("{p}={v}"))
                .collect();
            format!(
                "Costs by {} ({})",
                self.parameter.label(),
                forced.join(", ")
            )
        }
    }
}

/// Which cost line item field becomes the pivot columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    #[default]
    ProcessType,
    CostType,
}

impl CategoryField {
    pub fn of<'a>(&self, cost: &'a CostResult) -> &'a str {
        match self {
            CategoryField::ProcessType => &cost.process_type,
            CategoryField::CostType => &cost.cost_type,
        }
    }
}

/// Options for building an aggregated cost table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateOptions {
    #[serde(default)]
    pub category: CategoryField,
    /// Drop rows whose total is exactly zero (treated as "no feasible supply chain")
    #[serde(default = "default_drop_zero_totals")]
    pub drop_zero_totals: bool,
}

fn default_drop_zero_totals() -> bool {
    true
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            category: CategoryField::default(),
            drop_zero_totals: default_drop_zero_totals(),
        }
    }
}

impl AggregateOptions {
    pub fn by(category: CategoryField) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }
}
