//! Tests for the sweep runner
//!
//! These tests verify:
//! - Tags cover exactly the swept values, in request order
//! - Overrides and exclusions are applied
//! - Invalid settings are rejected before any calculation
//! - A single calculation failure abandons the whole sweep

use std::collections::BTreeSet;

use super::common::{ScriptedApi, base_settings, cost};
use crate::analysis::{SweepRequest, run_sweep, sweep_values};
use crate::api::{get_dimension, validate_settings};
use crate::error::{CalculationError, PtxError};
use crate::model::{Dimension, Parameter, SettingsOverrides};

fn flat_api() -> ScriptedApi {
    ScriptedApi::new(|settings| {
        let region = settings.get(Parameter::Region).unwrap_or_default();
        Ok(vec![
            cost(region, "CAPEX", "Electrolysis", 10.0),
            cost(region, "OPEX", "Electrolysis", 2.0),
        ])
    })
}

#[test]
fn test_sweep_tags_exactly_the_dimension_members() {
    let api = flat_api();
    let result = run_sweep(&api, &base_settings(), &SweepRequest::new(Parameter::Region)).unwrap();

    let tagged: BTreeSet<&str> = result.rows().iter().map(|r| r.swept_value.as_str()).collect();
    let expected: BTreeSet<&str> = ["Argentina", "Morocco", "South Africa"].into_iter().collect();
    assert_eq!(tagged, expected);
    assert_eq!(result.distinct_values(), vec!["Argentina", "Morocco", "South Africa"]);
    assert_eq!(result.len(), 6);
    assert_eq!(api.call_count(), 3);
}

#[test]
fn test_sweep_sets_swept_parameter_on_each_call() {
    let api = flat_api();
    run_sweep(&api, &base_settings(), &SweepRequest::new(Parameter::Chain)).unwrap();

    let chains: Vec<String> = api
        .calls()
        .iter()
        .map(|s| s.get(Parameter::Chain).unwrap().to_string())
        .collect();
    assert_eq!(chains, vec!["Ammonia (AEL)", "Methanol (AEL)", "Hydrogen (AEL)"]);
    for call in api.calls() {
        assert_eq!(call.get(Parameter::Region), Some("Argentina"));
    }
}

#[test]
fn test_explicit_values_keep_order_and_duplicates() {
    let api = flat_api();
    let request = SweepRequest::new(Parameter::Region).with_values(["South Africa", "Argentina", "South Africa"]);

    let result = run_sweep(&api, &base_settings(), &request).unwrap();

    let order: Vec<&str> = result.rows().iter().map(|r| r.swept_value.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "South Africa",
            "South Africa",
            "Argentina",
            "Argentina",
            "South Africa",
            "South Africa"
        ]
    );
    assert_eq!(result.values(), ["South Africa", "Argentina", "South Africa"]);
    assert_eq!(api.call_count(), 3);
}

#[test]
fn test_exclusions_are_removed_from_sweep() {
    let api = flat_api();
    let request = SweepRequest::new(Parameter::ResGen).excluding(["PV tracking"]);

    assert_eq!(
        sweep_values(&api, &request).unwrap(),
        vec!["PV tilted", "Wind Onshore"]
    );
    let result = run_sweep(&api, &base_settings(), &request).unwrap();
    assert!(result.rows_for("PV tracking").next().is_none());
    assert_eq!(api.call_count(), 2);
}

#[test]
fn test_overrides_apply_to_every_call_only() {
    let api = flat_api();
    let base = base_settings();
    let request = SweepRequest::new(Parameter::Chain)
        .with_overrides(SettingsOverrides::new().set(Parameter::OutputUnit, "USD/MWh"));

    run_sweep(&api, &base, &request).unwrap();

    assert!(
        api.calls()
            .iter()
            .all(|s| s.get(Parameter::OutputUnit) == Some("USD/MWh"))
    );
    assert_eq!(base.get(Parameter::OutputUnit), Some("USD/t"));
}

#[test]
fn test_flag_parameter_sweeps_true_and_false() {
    let api = flat_api();
    let result = run_sweep(&api, &base_settings(), &SweepRequest::new(Parameter::ShipOwnFuel)).unwrap();
    assert_eq!(result.distinct_values(), vec!["true", "false"]);
}

#[test]
fn test_invalid_value_rejected_before_any_call() {
    let api = flat_api();
    let request = SweepRequest::new(Parameter::Region).with_values(["Argentina", "Atlantis"]);

    let err = run_sweep(&api, &base_settings(), &request).unwrap_err();

    assert_eq!(
        err,
        PtxError::InvalidSettingValue {
            parameter: Parameter::Region,
            value: "Atlantis".to_string()
        }
    );
    assert_eq!(api.call_count(), 0);
}

#[test]
fn test_invalid_base_setting_rejected() {
    let api = flat_api();
    let base = base_settings().with(Parameter::Transport, "Teleport");

    let err = run_sweep(&api, &base, &SweepRequest::new(Parameter::Region)).unwrap_err();

    assert!(matches!(
        err,
        PtxError::InvalidSettingValue {
            parameter: Parameter::Transport,
            ..
        }
    ));
    assert_eq!(api.call_count(), 0);
}

#[test]
fn test_missing_setting_rejected() {
    let api = flat_api();
    let base: crate::model::ScenarioSettings = base_settings()
        .iter()
        .filter(|(p, _)| *p != Parameter::Country)
        .map(|(p, v)| (p, v.to_string()))
        .collect();

    let err = run_sweep(&api, &base, &SweepRequest::new(Parameter::Region)).unwrap_err();
    assert_eq!(err, PtxError::MissingSetting(Parameter::Country));
    assert_eq!(api.call_count(), 0);
}

#[test]
fn test_missing_setting_reported_before_invalid_values() {
    let api = flat_api();
    let base: crate::model::ScenarioSettings = base_settings()
        .with(Parameter::Transport, "Teleport")
        .iter()
        .filter(|(p, _)| *p != Parameter::OutputUnit)
        .map(|(p, v)| (p, v.to_string()))
        .collect();

    let err = validate_settings(&api, &base, Some(Parameter::Region)).unwrap_err();
    assert_eq!(err, PtxError::MissingSetting(Parameter::OutputUnit));
    assert_eq!(api.call_count(), 0);
}

#[test]
fn test_swept_parameter_may_be_absent_from_base() {
    let api = flat_api();
    let base: crate::model::ScenarioSettings = base_settings()
        .iter()
        .filter(|(p, _)| *p != Parameter::Region)
        .map(|(p, v)| (p, v.to_string()))
        .collect();

    assert!(validate_settings(&api, &base, Some(Parameter::Region)).is_ok());
    let result = run_sweep(&api, &base, &SweepRequest::new(Parameter::Region)).unwrap();
    assert_eq!(result.distinct_values().len(), 3);
}

#[test]
fn test_failure_abandons_sweep() {
    let api = ScriptedApi::new(|settings| {
        let region = settings.get(Parameter::Region).unwrap_or_default();
        if region == "Morocco" {
            return Err(CalculationError::new("no data for Morocco"));
        }
        Ok(vec![cost(region, "CAPEX", "Electrolysis", 1.0)])
    });

    let err = run_sweep(&api, &base_settings(), &SweepRequest::new(Parameter::Region)).unwrap_err();

    match err {
        PtxError::CalculationFailure {
            parameter,
            value,
            source,
        } => {
            assert_eq!(parameter, Parameter::Region);
            assert_eq!(value, "Morocco");
            assert_eq!(source.message(), "no data for Morocco");
        }
        other => panic!("expected calculation failure, got {other:?}"),
    }
    // South Africa is never calculated
    assert_eq!(api.call_count(), 2);
}

#[test]
fn test_get_dimension_by_name() {
    let api = flat_api();

    let regions = get_dimension(&api, "region").unwrap();
    assert_eq!(regions.dimension, Dimension::Region);
    assert_eq!(regions.codes(), vec!["Argentina", "Morocco", "South Africa"]);

    assert_eq!(
        get_dimension(&api, "planet").unwrap_err(),
        PtxError::UnknownDimension("planet".to_string())
    );
}
