use std::fmt;

use crate::model::Parameter;

/// Error reported by a calculation backend.
///
/// The aggregation pipeline never inspects this value; it is carried through
/// unchanged inside [`PtxError::CalculationFailure`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationError {
    message: String,
}

impl CalculationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CalculationError {}

/// Errors raised by dimension lookups, settings validation and sweeps
#[derive(Debug, Clone, PartialEq)]
pub enum PtxError {
    /// Dimension name outside the recognised set
    UnknownDimension(String),
    /// Scenario parameter name outside the recognised set
    UnknownParameter(String),
    /// Settings value that is not a member of its dimension
    InvalidSettingValue { parameter: Parameter, value: String },
    /// Required scenario parameter has no value
    MissingSetting(Parameter),
    /// No input data exists for the requested scenario
    UnknownScenario(String),
    /// The calculation backend failed for one swept value; the sweep was abandoned
    CalculationFailure {
        parameter: Parameter,
        value: String,
        source: CalculationError,
    },
}

impl fmt::Display for PtxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PtxError::UnknownDimension(name) => write!(f, "unknown dimension {name:?}"),
            PtxError::UnknownParameter(name) => write!(f, "unknown scenario parameter {name:?}"),
            PtxError::InvalidSettingValue { parameter, value } => {
                write!(f, "{value:?} is not a valid value for {parameter}")
            }
            PtxError::MissingSetting(parameter) => {
                write!(f, "scenario setting {parameter} is not set")
            }
            PtxError::UnknownScenario(scenario) => {
                write!(f, "no input data for scenario {scenario:?}")
            }
            PtxError::CalculationFailure {
                parameter,
                value,
                source,
            } => write!(f, "calculation failed for {parameter}={value:?}: {source}"),
        }
    }
}

impl std::error::Error for PtxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PtxError::CalculationFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PtxError>;
