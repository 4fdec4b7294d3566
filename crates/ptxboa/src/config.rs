//! Application configuration and dataset loading
//!
//! Layout of the data directory:
//! ~/.ptxboa/
//!   config.yaml          # Default settings, dashboard sweeps, deep-dive countries
//!   ptxboa.log           # Rotated log file

use std::fs;
use std::path::{Path, PathBuf};

use ptxboa_core::analysis::{AggregateOptions, SweepRequest};
use ptxboa_core::model::{Parameter, SettingsOverrides};
use ptxboa_core::{Dataset, ScenarioSettings};
use serde::{Deserialize, Serialize};

use crate::session::InputEdit;

/// Sample dataset compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../data/sample_dataset.yaml");

/// Configuration stored in config.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset file; the bundled sample dataset when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
    /// Scenario settings the session starts from
    pub settings: ScenarioSettings,
    pub dashboard: DashboardConfig,
    pub deep_dive: DeepDiveConfig,
    pub aggregation: AggregateOptions,
    /// Edits to input data, shown in data-editing mode
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_changes: Vec<InputEdit>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            settings: default_settings(),
            dashboard: DashboardConfig::default(),
            deep_dive: DeepDiveConfig::default(),
            aggregation: AggregateOptions::default(),
            user_changes: Vec::new(),
        }
    }
}

/// Sweeps computed for every session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub sweeps: Vec<SweepRequest>,
    /// Row limit for "cheapest" listings
    pub top: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sweeps: vec![
                SweepRequest::new(Parameter::Region),
                SweepRequest::new(Parameter::Scenario),
                SweepRequest::new(Parameter::ResGen).excluding(["PV tracking"]),
                SweepRequest::new(Parameter::Chain)
                    .with_overrides(SettingsOverrides::new().set(Parameter::OutputUnit, "USD/MWh")),
            ],
            top: 10,
        }
    }
}

/// Countries offered in the deep-dive view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepDiveConfig {
    pub countries: Vec<String>,
    /// Generation processes whose input distribution is summarized
    pub processes: Vec<String>,
    /// Input parameter code summarized per process
    pub parameter: String,
}

impl Default for DeepDiveConfig {
    fn default() -> Self {
        Self {
            countries: vec![
                "Argentina".to_string(),
                "Morocco".to_string(),
                "South Africa".to_string(),
            ],
            processes: vec![
                "PV tilted".to_string(),
                "Wind Onshore".to_string(),
                "Wind Offshore".to_string(),
                "Wind-PV-Hybrid".to_string(),
            ],
            parameter: "full load hours".to_string(),
        }
    }
}

fn default_settings() -> ScenarioSettings {
    ScenarioSettings::new()
        .with(Parameter::Scenario, "2040 (medium)")
        .with(Parameter::SecprocCo2, "Direct Air Capture")
        .with(Parameter::SecprocWater, "Sea Water desalination")
        .with(Parameter::Chain, "Ammonia (AEL)")
        .with(Parameter::ResGen, "PV tilted")
        .with(Parameter::Region, "Morocco")
        .with(Parameter::Country, "Germany")
        .with(Parameter::Transport, "Ship")
        .with(Parameter::ShipOwnFuel, "false")
        .with(Parameter::OutputUnit, "USD/t")
}

/// Error types for configuration and dataset loading
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Load the config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Get the path to config.yaml inside a data directory
    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.yaml")
    }
}

/// Where the session's dataset comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Bundled,
    File(PathBuf),
}

impl DatasetSource {
    pub fn load(&self) -> Result<Dataset, ConfigError> {
        match self {
            DatasetSource::Bundled => parse_dataset(BUNDLED_DATASET, "bundled dataset"),
            DatasetSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
                })?;
                parse_dataset(&content, &path.display().to_string())
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DatasetSource::Bundled => "bundled sample dataset".to_string(),
            DatasetSource::File(path) => path.display().to_string(),
        }
    }
}

fn parse_dataset(content: &str, origin: &str) -> Result<Dataset, ConfigError> {
    serde_saphyr::from_str(content)
        .map_err(|e| ConfigError::Parse(format!("Failed to parse {}: {}", origin, e)))
}
