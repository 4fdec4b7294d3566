use ptxboa_core::PtxError;

use crate::report::{Cell, Report, Section};
use crate::results::SessionResults;

use super::ViewContext;

pub(super) fn render(ctx: &ViewContext<'_>) -> Result<Report, PtxError> {
    let settings = ctx.session.settings();
    let results = SessionResults::compute(
        ctx.api,
        settings,
        &ctx.config.dashboard.sweeps,
        &ctx.config.aggregation,
    )?;

    let mut report = Report::new("Dashboard");
    report.push(Section::Table {
        heading: "Scenario settings".to_string(),
        headers: vec!["Parameter".to_string(), "Value".to_string()],
        rows: settings
            .iter()
            .map(|(parameter, value)| vec![Cell::from(parameter.label()), Cell::from(value)])
            .collect(),
        footnote: None,
    });

    for swept in results.tables() {
        report.push(Section::cost_table(swept.label(), &swept.table));
    }

    if results.total_dropped() > 0 {
        report.push(Section::notice(
            "Rows with a total of zero have no feasible supply chain and are hidden.",
        ));
    }

    Ok(report)
}
