use ptxboa_core::api::get_dimension;
use ptxboa_core::model::Parameter;
use ptxboa_core::{CalculationApi, PtxError};

use crate::report::{Cell, Report, Section};
use crate::session::{InputEdit, apply_user_changes};

use super::ViewContext;

/// Raw inputs of the selected scenario for the selected supply region and
/// its subregions
pub(super) fn render(ctx: &ViewContext<'_>) -> Result<Report, PtxError> {
    let settings = ctx.session.settings();
    let scenario = settings.get(Parameter::Scenario).unwrap_or_default();
    let region = settings.get(Parameter::Region).unwrap_or_default();
    let mut report = Report::new("Input data");

    let inputs = match ctx.api.get_input_data(scenario) {
        Ok(inputs) => inputs,
        Err(PtxError::UnknownScenario(_)) => {
            return Ok(report.with(Section::notice(format!(
                "No input data for scenario {scenario}"
            ))));
        }
        Err(e) => return Err(e),
    };

    let regions = get_dimension(ctx.api, "region")?.subregions_of(region);
    let changes: &[InputEdit] = if ctx.session.edit_mode() {
        ctx.session.user_changes()
    } else {
        &[]
    };

    let mut headers: Vec<String> = ["Region", "Process", "Parameter", "Value", "Unit"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    if ctx.session.edit_mode() {
        headers.push("Edited".to_string());
    }

    let rows = apply_user_changes(inputs, changes)
        .into_iter()
        .filter(|r| regions.contains(&r.record.source_region_code))
        .map(|r| {
            let mut row = vec![
                Cell::from(r.record.source_region_code),
                Cell::from(r.record.process_code),
                Cell::from(r.record.parameter_code),
                Cell::from(r.record.value),
                Cell::from(r.record.unit),
            ];
            if ctx.session.edit_mode() {
                row.push(Cell::from(if r.edited { "yes" } else { "" }));
            }
            row
        })
        .collect();

    report.push(Section::Table {
        heading: format!("{region}, scenario {scenario}"),
        headers,
        rows,
        footnote: None,
    });

    let pending = ctx.session.user_changes().len();
    if ctx.session.edit_mode() {
        report.push(Section::notice(format!(
            "Data editing mode: {pending} user change(s) applied"
        )));
    } else if pending > 0 {
        report.push(Section::notice(format!(
            "{pending} user change(s) hidden; enable data editing mode to apply them"
        )));
    }

    Ok(report)
}
