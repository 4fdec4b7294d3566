//! Parameter sweep runner - one calculation per value of the swept parameter.

use serde::Serialize;

use crate::api::{CalculationApi, check_value, parameter_members, validate_settings};
use crate::error::{PtxError, Result};
use crate::model::{CostResult, Parameter, ScenarioSettings};

use super::SweepRequest;

/// A cost line item tagged with the swept value that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub swept_value: String,
    #[serde(flatten)]
    pub cost: CostResult,
}

/// Long-form result of a sweep.
///
/// Rows are grouped in batches, one per requested value, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    parameter: Parameter,
    values: Vec<String>,
    rows: Vec<SweepRow>,
}

impl SweepResult {
    /// Assemble a result from already-tagged rows
    pub(crate) fn from_rows(parameter: Parameter, values: Vec<String>, rows: Vec<SweepRow>) -> Self {
        Self {
            parameter,
            values,
            rows,
        }
    }

    /// The parameter that was varied
    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    /// Requested values, in request order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows produced by one swept value.
    ///
    /// Public accessor for callers that consume the raw long-form result.
    pub fn rows_for<'a>(&'a self, value: &'a str) -> impl Iterator<Item = &'a SweepRow> + 'a {
        self.rows.iter().filter(move |r| r.swept_value == value)
    }

    /// Distinct tagged values, in order of first appearance.
    ///
    /// Public accessor for callers that consume the raw long-form result;
    /// values whose calculation returned no rows are absent.
    pub fn distinct_values(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.swept_value.as_str()) {
                seen.push(&row.swept_value);
            }
        }
        seen
    }
}

/// Resolve the ordered list of values a request sweeps over
pub fn sweep_values<A>(api: &A, request: &SweepRequest) -> Result<Vec<String>>
where
    A: CalculationApi + ?Sized,
{
    let values = match &request.values {
        Some(values) => values.clone(),
        None => parameter_members(api, request.parameter)?,
    };
    Ok(values
        .into_iter()
        .filter(|v| !request.exclude.contains(v))
        .collect())
}

/// Run one calculation per swept value and concatenate the tagged results.
///
/// All settings are validated before the first calculation is issued. The
/// first calculation failure abandons the sweep and is returned as
/// [`PtxError::CalculationFailure`].
pub fn run_sweep<A>(
    api: &A,
    base_settings: &ScenarioSettings,
    request: &SweepRequest,
) -> Result<SweepResult>
where
    A: CalculationApi + ?Sized,
{
    let parameter = request.parameter;
    let values = sweep_values(api, request)?;
    let settings = base_settings.merged(&request.overrides);

    validate_settings(api, &settings, Some(parameter))?;
    for value in &values {
        check_value(api, parameter, value)?;
    }

    tracing::info!(
        parameter = %parameter,
        points = values.len(),
        "Starting parameter sweep"
    );

    let mut rows = Vec::new();
    for value in &values {
        let point = settings.with(parameter, value.as_str());
        let costs = api
            .calculate(&point)
            .map_err(|source| PtxError::CalculationFailure {
                parameter,
                value: value.clone(),
                source,
            })?;
        tracing::debug!(parameter = %parameter, value = %value, items = costs.len(), "Calculated sweep point");

        rows.extend(costs.into_iter().map(|cost| SweepRow {
            swept_value: value.clone(),
            cost,
        }));
    }

    Ok(SweepResult {
        parameter,
        values,
        rows,
    })
}
