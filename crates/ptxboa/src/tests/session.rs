//! Tests for session context transitions and user changes

use ptxboa_core::PtxError;
use ptxboa_core::model::{InputRecord, InputTable, Parameter, SettingsOverrides};

use crate::config::AppConfig;
use crate::session::{InputEdit, SessionContext, apply_user_changes, parse_assignment};
use crate::views::View;

fn edit(region: &str, process: &str, value: f64) -> InputEdit {
    InputEdit {
        source_region_code: region.to_string(),
        process_code: process.to_string(),
        parameter_code: "full load hours".to_string(),
        value,
    }
}

fn record(region: &str, process: &str, value: f64) -> InputRecord {
    InputRecord {
        source_region_code: region.to_string(),
        process_code: process.to_string(),
        parameter_code: "full load hours".to_string(),
        value,
        unit: "h/a".to_string(),
    }
}

#[test]
fn test_transitions_return_new_context() {
    let base = SessionContext::new(AppConfig::default().settings);

    let moved = base
        .with_setting(Parameter::Region, "Argentina")
        .with_view(View::MarketScanning)
        .with_edit_mode(true)
        .with_top(3);

    assert_eq!(base.settings().get(Parameter::Region), Some("Morocco"));
    assert_eq!(base.view(), View::Dashboard);
    assert!(!base.edit_mode());
    assert_eq!(base.top(), 10);

    assert_eq!(moved.settings().get(Parameter::Region), Some("Argentina"));
    assert_eq!(moved.view(), View::MarketScanning);
    assert!(moved.edit_mode());
    assert_eq!(moved.top(), 3);
}

#[test]
fn test_overrides_merge_into_settings() {
    let base = SessionContext::new(AppConfig::default().settings);
    let overrides = SettingsOverrides::new()
        .set(Parameter::Chain, "Methanol (AEL)")
        .set(Parameter::ShipOwnFuel, "true");

    let ctx = base.with_overrides(&overrides);

    assert_eq!(ctx.settings().get(Parameter::Chain), Some("Methanol (AEL)"));
    assert_eq!(ctx.settings().get(Parameter::ShipOwnFuel), Some("true"));
    assert_eq!(ctx.settings().get(Parameter::Region), Some("Morocco"));
}

#[test]
fn test_user_changes_accumulate() {
    let base = SessionContext::new(AppConfig::default().settings);
    let one = base.with_user_change(edit("Morocco", "PV tilted", 2500.0));
    let two = one.with_user_change(edit("Morocco", "Wind Onshore", 4000.0));

    assert!(base.user_changes().is_empty());
    assert_eq!(one.user_changes().len(), 1);
    assert_eq!(two.user_changes().len(), 2);
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_assignment("region=South Africa").unwrap(),
        (Parameter::Region, "South Africa".to_string())
    );
    assert_eq!(
        parse_assignment(" output_unit = USD/MWh ").unwrap(),
        (Parameter::OutputUnit, "USD/MWh".to_string())
    );
    assert_eq!(
        parse_assignment("regoin=Morocco").unwrap_err(),
        PtxError::UnknownParameter("regoin".to_string())
    );
    assert!(matches!(
        parse_assignment("Morocco"),
        Err(PtxError::UnknownParameter(_))
    ));
}

#[test]
fn test_apply_user_changes_last_change_wins() {
    let table = InputTable::new(vec![
        record("Morocco", "PV tilted", 1900.0),
        record("Morocco", "Wind Onshore", 3600.0),
    ]);
    let changes = vec![
        edit("Morocco", "PV tilted", 2000.0),
        edit("Morocco", "PV tilted", 2100.0),
        edit("Chile", "Wind Onshore", 1.0),
    ];

    let edited = apply_user_changes(&table, &changes);

    assert_eq!(edited.len(), 2);
    assert!(edited[0].edited);
    assert_eq!(edited[0].record.value, 2100.0);
    assert_eq!(edited[0].record.unit, "h/a");
    assert!(!edited[1].edited);
    assert_eq!(edited[1].record.value, 3600.0);
}
