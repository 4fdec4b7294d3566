use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PtxError;

/// Metadata key holding the long region name (e.g. "Argentina (Chubut)")
pub const REGION_NAME_KEY: &str = "region_name";

/// Named categorical dimensions known to the calculation API
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Scenario,
    SecprocCo2,
    SecprocWater,
    Chain,
    ResGen,
    Region,
    Country,
    Transport,
    OutputUnit,
    Process,
    #[serde(rename = "parameter")]
    ParameterCode,
}

impl Dimension {
    pub const ALL: [Dimension; 11] = [
        Dimension::Scenario,
        Dimension::SecprocCo2,
        Dimension::SecprocWater,
        Dimension::Chain,
        Dimension::ResGen,
        Dimension::Region,
        Dimension::Country,
        Dimension::Transport,
        Dimension::OutputUnit,
        Dimension::Process,
        Dimension::ParameterCode,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Scenario => "scenario",
            Dimension::SecprocCo2 => "secproc_co2",
            Dimension::SecprocWater => "secproc_water",
            Dimension::Chain => "chain",
            Dimension::ResGen => "res_gen",
            Dimension::Region => "region",
            Dimension::Country => "country",
            Dimension::Transport => "transport",
            Dimension::OutputUnit => "output_unit",
            Dimension::Process => "process",
            Dimension::ParameterCode => "parameter",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = PtxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| PtxError::UnknownDimension(s.to_string()))
    }
}

/// A single member of a dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionMember {
    pub code: String,
    /// Display name; falls back to the code when empty
    #[serde(default)]
    pub name: String,
    /// Free-form attributes such as region groupings
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl DimensionMember {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.code
        } else {
            &self.name
        }
    }
}

/// All members of one dimension, in the order the data source defines them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionTable {
    pub dimension: Dimension,
    pub members: Vec<DimensionMember>,
}

impl DimensionTable {
    pub fn new(dimension: Dimension, members: Vec<DimensionMember>) -> Self {
        Self { dimension, members }
    }

    pub fn empty(dimension: Dimension) -> Self {
        Self::new(dimension, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionMember> {
        self.members.iter()
    }

    /// Member codes in dimension order
    pub fn codes(&self) -> Vec<String> {
        self.members.iter().map(|m| m.code.clone()).collect()
    }

    pub fn get(&self, code: &str) -> Option<&DimensionMember> {
        self.members.iter().find(|m| m.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Codes of regions whose long name starts with `country`.
    ///
    /// The country itself is included when it appears as a region.
    pub fn subregions_of(&self, country: &str) -> Vec<String> {
        self.members
            .iter()
            .filter(|m| {
                m.metadata
                    .get(REGION_NAME_KEY)
                    .map_or(m.display_name(), String::as_str)
                    .starts_with(country)
            })
            .map(|m| m.code.clone())
            .collect()
    }
}
