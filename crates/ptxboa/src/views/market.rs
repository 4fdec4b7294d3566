use ptxboa_core::PtxError;
use ptxboa_core::model::Parameter;

use crate::report::{Report, Section};

use super::ViewContext;

/// Supply regions for the selected demand country, cheapest first unless
/// the user picked regions by hand
pub(super) fn render(ctx: &ViewContext<'_>) -> Result<Report, PtxError> {
    let costs = ctx.region_costs()?;
    let country = ctx
        .session
        .settings()
        .get(Parameter::Country)
        .unwrap_or_default();

    let selection = ctx.session.market_selection();
    let (heading, table) = if selection.is_empty() {
        (
            format!(
                "{} cheapest supply regions for delivery to {country}",
                ctx.session.top()
            ),
            costs.cheapest(ctx.session.top()),
        )
    } else {
        (
            format!("Selected supply regions for delivery to {country}"),
            costs.select(selection),
        )
    };

    let mut report = Report::new("Market scanning").with(Section::cost_table(heading, &table));

    let missing: Vec<&str> = selection
        .iter()
        .map(String::as_str)
        .filter(|s| table.row(s).is_none())
        .collect();
    if !missing.is_empty() {
        report.push(Section::notice(format!(
            "Not available: {}",
            missing.join(", ")
        )));
    }

    Ok(report)
}
