use ptxboa_core::model::Dimension;
use ptxboa_core::{CalculationApi, PtxError};

use crate::report::{Cell, Report, Section};

use super::ViewContext;

const ABOUT: &str = "The PtX Business Opportunity Analyzer compares the cost of producing \
green hydrogen and its derivatives in supply regions worldwide and delivering them \
to demand countries. Costs are computed per scenario, conversion chain, renewable \
source and transport mode.";

pub(super) fn render(ctx: &ViewContext<'_>) -> Result<Report, PtxError> {
    let mut report = Report::new("Info").with(Section::text("About", ABOUT));

    let policy = if ctx.config.aggregation.drop_zero_totals {
        "Cost tables hide entries whose total is zero, which indicates that no \
         feasible supply chain exists for them."
    } else {
        "Cost tables show every requested entry, including those with a total of zero."
    };
    report.push(Section::notice(policy));

    let mut rows = Vec::with_capacity(Dimension::ALL.len());
    for dimension in Dimension::ALL {
        let table = ctx.api.get_dimension(dimension)?;
        rows.push(vec![
            Cell::from(dimension.name()),
            Cell::from(table.len().to_string()),
        ]);
    }
    report.push(Section::Table {
        heading: "Dataset".to_string(),
        headers: vec!["Dimension".to_string(), "Members".to_string()],
        rows,
        footnote: Some(format!("{} cost rules loaded", ctx.api.rule_count())),
    });

    Ok(report)
}
