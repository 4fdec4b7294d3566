//! In-memory calculation backend driven by a rule table.
//!
//! A [`Dataset`] bundles dimension tables, cost rules and per-scenario input
//! data. [`DatasetApi`] answers `calculate` by returning the cost items of
//! every rule whose conditions match the requested settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::CalculationApi;
use crate::error::{CalculationError, PtxError, Result};
use crate::model::{
    CostResult, Dimension, DimensionMember, DimensionTable, InputRecord, InputTable, Parameter,
    ScenarioSettings,
};

/// One cost item produced by a matching rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCost {
    pub cost_type: String,
    pub process_type: String,
    pub value: f64,
}

/// Cost items that apply when every condition matches.
///
/// A condition lists the accepted values of one parameter. Parameters
/// without a condition match any value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostRule {
    #[serde(default)]
    pub when: BTreeMap<Parameter, Vec<String>>,
    pub costs: Vec<RuleCost>,
}

impl CostRule {
    pub fn matches(&self, settings: &ScenarioSettings) -> bool {
        self.when.iter().all(|(parameter, accepted)| {
            settings
                .get(*parameter)
                .is_some_and(|value| accepted.iter().any(|a| a == value))
        })
    }
}

/// A titled block of static context text (fact sheets, literature, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextEntry {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Serializable bundle backing a [`DatasetApi`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub dimensions: BTreeMap<Dimension, Vec<DimensionMember>>,
    #[serde(default)]
    pub rules: Vec<CostRule>,
    /// Input parameter tables keyed by scenario code
    #[serde(default)]
    pub input_data: BTreeMap<String, Vec<InputRecord>>,
    /// Multiplier applied to rule values per output unit (default 1.0)
    #[serde(default)]
    pub unit_factors: BTreeMap<String, f64>,
    /// Static context sections keyed by topic
    #[serde(default)]
    pub context: BTreeMap<String, Vec<ContextEntry>>,
}

/// Calculation API over an in-memory [`Dataset`]
#[derive(Debug, Clone)]
pub struct DatasetApi {
    rules: Vec<CostRule>,
    unit_factors: BTreeMap<String, f64>,
    context: BTreeMap<String, Vec<ContextEntry>>,
    dimensions: BTreeMap<Dimension, DimensionTable>,
    inputs: BTreeMap<String, InputTable>,
}

impl DatasetApi {
    pub fn new(dataset: Dataset) -> Self {
        let Dataset {
            mut dimensions,
            rules,
            input_data,
            unit_factors,
            context,
        } = dataset;

        // Every known dimension gets a table, empty when the dataset omits it
        let dimensions = Dimension::ALL
            .into_iter()
            .map(|d| {
                let members = dimensions.remove(&d).unwrap_or_default();
                (d, DimensionTable::new(d, members))
            })
            .collect();

        let inputs = input_data
            .into_iter()
            .map(|(scenario, records)| (scenario, InputTable::new(records)))
            .collect();

        tracing::debug!(rules = rules.len(), "Dataset API initialized");

        Self {
            rules,
            unit_factors,
            context,
            dimensions,
            inputs,
        }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Context entries for a topic, empty when none were loaded
    pub fn context(&self, topic: &str) -> &[ContextEntry] {
        self.context
            .get(topic)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn unit_factor(&self, unit: &str) -> f64 {
        self.unit_factors.get(unit).copied().unwrap_or(1.0)
    }

    fn require<'s>(
        &self,
        settings: &'s ScenarioSettings,
        parameter: Parameter,
    ) -> std::result::Result<&'s str, CalculationError> {
        let value = settings
            .get(parameter)
            .ok_or_else(|| CalculationError::new(format!("missing setting {parameter}")))?;
        let valid = match parameter.dimension() {
            Some(dimension) => self
                .dimensions
                .get(&dimension)
                .is_some_and(|t| t.contains(value)),
            None => Parameter::FLAG_VALUES.contains(&value),
        };
        if valid {
            Ok(value)
        } else {
            Err(CalculationError::new(format!(
                "{value:?} is not a member of {parameter}"
            )))
        }
    }
}

impl CalculationApi for DatasetApi {
    fn calculate(
        &self,
        settings: &ScenarioSettings,
    ) -> std::result::Result<Vec<CostResult>, CalculationError> {
        for parameter in Parameter::ALL {
            self.require(settings, parameter)?;
        }
        let region = self.require(settings, Parameter::Region)?;
        let unit = self.require(settings, Parameter::OutputUnit)?;
        let factor = self.unit_factor(unit);

        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.matches(settings))
            .flat_map(|rule| rule.costs.iter())
            .map(|cost| {
                CostResult::new(
                    region,
                    cost.cost_type.as_str(),
                    cost.process_type.as_str(),
                    cost.value * factor,
                    unit,
                )
            })
            .collect())
    }

    fn get_dimension(&self, dimension: Dimension) -> Result<&DimensionTable> {
        self.dimensions
            .get(&dimension)
            .ok_or_else(|| PtxError::UnknownDimension(dimension.name().to_string()))
    }

    fn get_input_data(&self, scenario: &str) -> Result<&InputTable> {
        self.inputs
            .get(scenario)
            .ok_or_else(|| PtxError::UnknownScenario(scenario.to_string()))
    }
}
