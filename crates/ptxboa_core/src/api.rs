//! Seam to the techno-economic calculation engine and dimension lookups.
//!
//! The cost model itself is an external collaborator. Anything implementing
//! [`CalculationApi`] can drive the sweep and aggregation pipeline; the
//! [`DatasetApi`](crate::dataset::DatasetApi) is the in-memory implementation
//! shipped with this crate.

use crate::error::{CalculationError, PtxError, Result};
use crate::model::{CostResult, Dimension, DimensionTable, InputTable, Parameter, ScenarioSettings};

/// Calculation and lookup facade of a PtX cost model
pub trait CalculationApi {
    /// Compute the cost line items for one complete set of scenario settings
    fn calculate(
        &self,
        settings: &ScenarioSettings,
    ) -> std::result::Result<Vec<CostResult>, CalculationError>;

    /// All members of a dimension, in source order
    fn get_dimension(&self, dimension: Dimension) -> Result<&DimensionTable>;

    /// Raw input parameters of a scenario
    fn get_input_data(&self, scenario: &str) -> Result<&InputTable>;
}

/// Look up a dimension by its name.
///
/// Fails with [`PtxError::UnknownDimension`] for names outside the fixed set.
pub fn get_dimension<'a, A>(api: &'a A, name: &str) -> Result<&'a DimensionTable>
where
    A: CalculationApi + ?Sized,
{
    let dimension: Dimension = name.parse()?;
    api.get_dimension(dimension)
}

/// Valid values of a scenario parameter, in dimension order
pub fn parameter_members<A>(api: &A, parameter: Parameter) -> Result<Vec<String>>
where
    A: CalculationApi + ?Sized,
{
    match parameter.dimension() {
        Some(dimension) => Ok(api.get_dimension(dimension)?.codes()),
        None => Ok(Parameter::FLAG_VALUES.iter().map(|v| v.to_string()).collect()),
    }
}

/// Check that `value` is a member of the parameter's dimension
pub fn check_value<A>(api: &A, parameter: Parameter, value: &str) -> Result<()>
where
    A: CalculationApi + ?Sized,
{
    let valid = match parameter.dimension() {
        Some(dimension) => api.get_dimension(dimension)?.contains(value),
        None => Parameter::FLAG_VALUES.contains(&value),
    };
    if valid {
        Ok(())
    } else {
        Err(PtxError::InvalidSettingValue {
            parameter,
            value: value.to_string(),
        })
    }
}

/// Validate every parameter of `settings` except `skip`.
///
/// All parameters other than `skip` must be present and valid.
pub fn validate_settings<A>(
    api: &A,
    settings: &ScenarioSettings,
    skip: Option<Parameter>,
) -> Result<()>
where
    A: CalculationApi + ?Sized,
{
    if let Some(parameter) = settings.missing().into_iter().find(|p| Some(*p) != skip) {
        return Err(PtxError::MissingSetting(parameter));
    }
    for (parameter, value) in settings.iter() {
        if Some(parameter) != skip {
            check_value(api, parameter, value)?;
        }
    }
    Ok(())
}
