//! Shared fixtures: a scripted calculation backend and complete settings.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::analysis::{SweepResult, SweepRow};
use crate::api::CalculationApi;
use crate::error::{CalculationError, PtxError, Result};
use crate::model::{
    CostResult, Dimension, DimensionMember, DimensionTable, InputTable, Parameter,
    ScenarioSettings,
};

type Responder =
    Box<dyn Fn(&ScenarioSettings) -> std::result::Result<Vec<CostResult>, CalculationError>>;

/// Calculation backend answering from a closure and recording every call
pub struct ScriptedApi {
    dimensions: BTreeMap<Dimension, DimensionTable>,
    inputs: BTreeMap<String, InputTable>,
    responder: Responder,
    calls: RefCell<Vec<ScenarioSettings>>,
}

impl ScriptedApi {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&ScenarioSettings) -> std::result::Result<Vec<CostResult>, CalculationError>
            + 'static,
    {
        let members: Vec<(Dimension, Vec<&str>)> = vec![
            (Dimension::Scenario, vec!["2030 (low)", "2040 (medium)"]),
            (Dimension::SecprocCo2, vec!["Direct Air Capture", "Specific costs"]),
            (
                Dimension::SecprocWater,
                vec!["Sea Water desalination", "Specific costs"],
            ),
            (
                Dimension::Chain,
                vec!["Ammonia (AEL)", "Methanol (AEL)", "Hydrogen (AEL)"],
            ),
            (Dimension::ResGen, vec!["PV tilted", "Wind Onshore", "PV tracking"]),
            (Dimension::Region, vec!["Argentina", "Morocco", "South Africa"]),
            (Dimension::Country, vec!["China", "Germany"]),
            (Dimension::Transport, vec!["Ship", "Pipeline"]),
            (Dimension::OutputUnit, vec!["USD/MWh", "USD/t"]),
        ];

        let mut dimensions: BTreeMap<Dimension, DimensionTable> = Dimension::ALL
            .into_iter()
            .map(|d| (d, DimensionTable::empty(d)))
            .collect();
        for (dimension, codes) in members {
            let table = DimensionTable::new(
                dimension,
                codes.iter().map(|c| DimensionMember::new(*c)).collect(),
            );
            dimensions.insert(dimension, table);
        }

        Self {
            dimensions,
            inputs: BTreeMap::new(),
            responder: Box::new(responder),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls(&self) -> Vec<ScenarioSettings> {
        self.calls.borrow().clone()
    }
}

impl CalculationApi for ScriptedApi {
    fn calculate(
        &self,
        settings: &ScenarioSettings,
    ) -> std::result::Result<Vec<CostResult>, CalculationError> {
        self.calls.borrow_mut().push(settings.clone());
        (self.responder)(settings)
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

/// Complete settings whose values are members of the scripted dimensions
pub fn base_settings() -> ScenarioSettings {
    ScenarioSettings::new()
        .with(Parameter::Scenario, "2040 (medium)")
        .with(Parameter::SecprocCo2, "Direct Air Capture")
        .with(Parameter::SecprocWater, "Sea Water desalination")
        .with(Parameter::Chain, "Ammonia (AEL)")
        .with(Parameter::ResGen, "PV tilted")
        .with(Parameter::Region, "Argentina")
        .with(Parameter::Country, "China")
        .with(Parameter::Transport, "Ship")
        .with(Parameter::ShipOwnFuel, "false")
        .with(Parameter::OutputUnit, "USD/t")
}

pub fn cost(region: &str, cost_type: &str, process_type: &str, value: f64) -> CostResult {
    CostResult::new(region, cost_type, process_type, value, "USD/t")
}

/// Build a sweep result by hand: (swept value, cost_type, process_type, value)
pub fn sweep_of(parameter: Parameter, rows: &[(&str, &str, &str, f64)]) -> SweepResult {
    let mut values: Vec<String> = Vec::new();
    for (value, ..) in rows {
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    let rows = rows
        .iter()
        .map(|(value, cost_type, process_type, amount)| SweepRow {
            swept_value: value.to_string(),
            cost: cost(value, cost_type, process_type, *amount),
        })
        .collect();
    SweepResult::from_rows(parameter, values, rows)
}
