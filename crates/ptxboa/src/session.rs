//! Session context threaded through every view.
//!
//! A [`SessionContext`] is never mutated. Every transition (changing a
//! setting, switching tab, toggling edit mode) returns a new context.

use ptxboa_core::model::{InputRecord, InputTable, Parameter, SettingsOverrides};
use ptxboa_core::{PtxError, ScenarioSettings};
use serde::{Deserialize, Serialize};

use crate::views::View;

/// A user change to one input parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEdit {
    pub source_region_code: String,
    pub process_code: String,
    pub parameter_code: String,
    pub value: f64,
}

impl InputEdit {
    pub fn applies_to(&self, record: &InputRecord) -> bool {
        record.source_region_code == self.source_region_code
            && record.process_code == self.process_code
            && record.parameter_code == self.parameter_code
    }
}

/// An input record after user changes, flagged when a change replaced its value
#[derive(Debug, Clone, PartialEq)]
pub struct EditedRecord {
    pub record: InputRecord,
    pub edited: bool,
}

/// Apply user changes to a scenario's inputs; the last matching change wins
pub fn apply_user_changes(table: &InputTable, changes: &[InputEdit]) -> Vec<EditedRecord> {
    table
        .records()
        .iter()
        .map(|record| match changes.iter().rev().find(|c| c.applies_to(record)) {
            Some(change) => EditedRecord {
                record: InputRecord {
                    value: change.value,
                    ..record.clone()
                },
                edited: true,
            },
            None => EditedRecord {
                record: record.clone(),
                edited: false,
            },
        })
        .collect()
}

/// Parse a `parameter=value` assignment
pub fn parse_assignment(s: &str) -> Result<(Parameter, String), PtxError> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| PtxError::UnknownParameter(s.to_string()))?;
    let parameter: Parameter = key.trim().parse()?;
    Ok((parameter, value.trim().to_string()))
}

/// Everything a view needs to know about the current interaction
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    settings: ScenarioSettings,
    view: View,
    edit_mode: bool,
    user_changes: Vec<InputEdit>,
    market_selection: Vec<String>,
    deep_dive_country: Option<String>,
    top: usize,
}

impl SessionContext {
    pub fn new(settings: ScenarioSettings) -> Self {
        Self {
            settings,
            view: View::default(),
            edit_mode: false,
            user_changes: Vec::new(),
            market_selection: Vec::new(),
            deep_dive_country: None,
            top: 10,
        }
    }

    pub fn settings(&self) -> &ScenarioSettings {
        &self.settings
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn user_changes(&self) -> &[InputEdit] {
        &self.user_changes
    }

    pub fn market_selection(&self) -> &[String] {
        &self.market_selection
    }

    pub fn deep_dive_country(&self) -> Option<&str> {
        self.deep_dive_country.as_deref()
    }

    pub fn top(&self) -> usize {
        self.top
    }

    #[must_use]
    pub fn with_setting(&self, parameter: Parameter, value: impl Into<String>) -> Self {
        Self {
            settings: self.settings.with(parameter, value),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_overrides(&self, overrides: &SettingsOverrides) -> Self {
        Self {
            settings: self.settings.merged(overrides),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_view(&self, view: View) -> Self {
        Self {
            view,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_edit_mode(&self, edit_mode: bool) -> Self {
        Self {
            edit_mode,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_user_change(&self, change: InputEdit) -> Self {
        let mut user_changes = self.user_changes.clone();
        user_changes.push(change);
        Self {
            user_changes,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_user_changes(&self, changes: Vec<InputEdit>) -> Self {
        Self {
            user_changes: changes,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_market_selection(&self, selection: Vec<String>) -> Self {
        Self {
            market_selection: selection,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_deep_dive_country(&self, country: impl Into<String>) -> Self {
        Self {
            deep_dive_country: Some(country.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_top(&self, top: usize) -> Self {
        Self {
            top,
            ..self.clone()
        }
    }
}
