use ptxboa_core::analysis::BoxStats;
use ptxboa_core::model::{Dimension, Parameter};
use ptxboa_core::{CalculationApi, PtxError};

use crate::report::{Cell, Report, Section};

use super::ViewContext;

/// Costs and input distributions across the subregions of one country
pub(super) fn render(ctx: &ViewContext<'_>) -> Result<Report, PtxError> {
    let deep_dive = &ctx.config.deep_dive;
    let mut report = Report::new("Deep-dive countries");

    let Some(country) = ctx
        .session
        .deep_dive_country()
        .or_else(|| deep_dive.countries.first().map(String::as_str))
    else {
        return Ok(report.with(Section::notice("No deep-dive countries configured")));
    };

    let regions = ctx
        .api
        .get_dimension(Dimension::Region)?
        .subregions_of(country);
    if regions.is_empty() {
        return Ok(report.with(Section::notice(format!("No regions found for {country}"))));
    }

    let costs = ctx.region_costs()?.select(&regions);
    report.push(Section::cost_table(
        format!("Costs by region of {country}"),
        &costs,
    ));

    let scenario = ctx
        .session
        .settings()
        .get(Parameter::Scenario)
        .unwrap_or_default();
    let inputs = match ctx.api.get_input_data(scenario) {
        Ok(inputs) => inputs,
        Err(PtxError::UnknownScenario(_)) => {
            return Ok(report.with(Section::notice(format!(
                "No input data for scenario {scenario}"
            ))));
        }
        Err(e) => return Err(e),
    };

    let rows: Vec<Vec<Cell>> = deep_dive
        .processes
        .iter()
        .filter_map(|process| {
            let values = inputs.values_for(&regions, &deep_dive.parameter, process);
            BoxStats::from_values(&values).map(|stats| {
                vec![
                    Cell::from(process.as_str()),
                    Cell::from(stats.count.to_string()),
                    Cell::from(stats.min),
                    Cell::from(stats.q1),
                    Cell::from(stats.median),
                    Cell::from(stats.q3),
                    Cell::from(stats.max),
                    Cell::from(stats.iqr()),
                ]
            })
        })
        .collect();

    if rows.is_empty() {
        report.push(Section::notice(format!(
            "No {} data for the regions of {country}",
            deep_dive.parameter
        )));
    } else {
        report.push(Section::Table {
            heading: format!("Distribution of {} in {country}", deep_dive.parameter),
            headers: ["Process", "Regions", "Min", "Q1", "Median", "Q3", "Max", "IQR"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            rows,
            footnote: None,
        });
    }

    Ok(report)
}
