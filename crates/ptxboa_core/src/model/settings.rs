use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Dimension;
use crate::error::PtxError;

/// Scenario parameters accepted by a cost calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Scenario,
    SecprocCo2,
    SecprocWater,
    Chain,
    ResGen,
    Region,
    Country,
    Transport,
    ShipOwnFuel,
    OutputUnit,
}

impl Parameter {
    pub const ALL: [Parameter; 10] = [
        Parameter::Scenario,
        Parameter::SecprocCo2,
        Parameter::SecprocWater,
        Parameter::Chain,
        Parameter::ResGen,
        Parameter::Region,
        Parameter::Country,
        Parameter::Transport,
        Parameter::ShipOwnFuel,
        Parameter::OutputUnit,
    ];

    /// Members of the boolean `ship_own_fuel` flag
    pub const FLAG_VALUES: [&'static str; 2] = ["true", "false"];

    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Scenario => "scenario",
            Parameter::SecprocCo2 => "secproc_co2",
            Parameter::SecprocWater => "secproc_water",
            Parameter::Chain => "chain",
            Parameter::ResGen => "res_gen",
            Parameter::Region => "region",
            Parameter::Country => "country",
            Parameter::Transport => "transport",
            Parameter::ShipOwnFuel => "ship_own_fuel",
            Parameter::OutputUnit => "output_unit",
        }
    }

    /// Human-readable label for column headers
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Scenario => "Scenario",
            Parameter::SecprocCo2 => "CO2 source",
            Parameter::SecprocWater => "Water source",
            Parameter::Chain => "Chain",
            Parameter::ResGen => "Renewable source",
            Parameter::Region => "Supply region",
            Parameter::Country => "Demand country",
            Parameter::Transport => "Transport",
            Parameter::ShipOwnFuel => "Ship uses own fuel",
            Parameter::OutputUnit => "Output unit",
        }
    }

    /// The dimension holding valid values, `None` for the boolean flag
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Parameter::Scenario => Some(Dimension::Scenario),
            Parameter::SecprocCo2 => Some(Dimension::SecprocCo2),
            Parameter::SecprocWater => Some(Dimension::SecprocWater),
            Parameter::Chain => Some(Dimension::Chain),
            Parameter::ResGen => Some(Dimension::ResGen),
            Parameter::Region => Some(Dimension::Region),
            Parameter::Country => Some(Dimension::Country),
            Parameter::Transport => Some(Dimension::Transport),
            Parameter::ShipOwnFuel => None,
            Parameter::OutputUnit => Some(Dimension::OutputUnit),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = PtxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| PtxError::UnknownParameter(s.to_string()))
    }
}

/// Partial settings applied on top of a base [`ScenarioSettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsOverrides {
    values: BTreeMap<Parameter, String>,
}

impl SettingsOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, parameter: Parameter, value: impl Into<String>) -> Self {
        self.values.insert(parameter, value.into());
        self
    }

    pub fn get(&self, parameter: Parameter) -> Option<&str> {
        self.values.get(&parameter).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &str)> {
        self.values.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

impl FromIterator<(Parameter, String)> for SettingsOverrides {
    fn from_iter<I: IntoIterator<Item = (Parameter, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Immutable set of scenario parameter values.
///
/// All "mutating" operations return a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioSettings {
    values: BTreeMap<Parameter, String>,
}

impl ScenarioSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, parameter: Parameter) -> Option<&str> {
        self.values.get(&parameter).map(String::as_str)
    }

    #[must_use]
    pub fn with(&self, parameter: Parameter, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(parameter, value.into());
        Self { values }
    }

    #[must_use]
    pub fn merged(&self, overrides: &SettingsOverrides) -> Self {
        let mut values = self.values.clone();
        for (parameter, value) in overrides.iter() {
            values.insert(parameter, value.to_string());
        }
        Self { values }
    }

    /// Parameters without a value, in declaration order
    pub fn missing(&self) -> Vec<Parameter> {
        Parameter::ALL
            .into_iter()
            .filter(|p| !self.values.contains_key(p))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.values.len() == Parameter::ALL.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &str)> {
        self.values.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

impl FromIterator<(Parameter, String)> for ScenarioSettings {
    fn from_iter<I: IntoIterator<Item = (Parameter, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
