//! Views (tabs) of the analyzer.
//!
//! [`View`] is a closed set; [`render`] matches on it and hands over to one
//! handler per variant. Handlers only read the API and the session context.

mod context;
mod dashboard;
mod deep_dive;
mod info;
mod input_data;
mod market;

use clap::ValueEnum;
use ptxboa_core::analysis::{SweepRequest, aggregate, run_sweep};
use ptxboa_core::model::Parameter;
use ptxboa_core::{AggregatedCostTable, DatasetApi, PtxError};

use crate::config::AppConfig;
use crate::report::Report;
use crate::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum View {
    #[default]
    Dashboard,
    MarketScanning,
    InputData,
    DeepDiveCountries,
    CountryFactSheets,
    CertificationSchemes,
    Sustainability,
    Literature,
    Info,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Dashboard,
        View::MarketScanning,
        View::InputData,
        View::DeepDiveCountries,
        View::CountryFactSheets,
        View::CertificationSchemes,
        View::Sustainability,
        View::Literature,
        View::Info,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::MarketScanning => "Market scanning",
            View::InputData => "Input data",
            View::DeepDiveCountries => "Deep-dive countries",
            View::CountryFactSheets => "Country fact sheets",
            View::CertificationSchemes => "Certification schemes",
            View::Sustainability => "Sustainability",
            View::Literature => "Literature",
            View::Info => "Info",
        }
    }

    /// Dataset `context` topic rendered by static-content views
    pub fn context_topic(&self) -> Option<&'static str> {
        match self {
            View::CountryFactSheets => Some("country_fact_sheets"),
            View::CertificationSchemes => Some("certification_schemes"),
            View::Sustainability => Some("sustainability"),
            View::Literature => Some("literature"),
            _ => None,
        }
    }
}

/// Everything a view handler reads
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub api: &'a DatasetApi,
    pub session: &'a SessionContext,
    pub config: &'a AppConfig,
}

impl ViewContext<'_> {
    /// Costs per supply region, using the configured region sweep when there is one
    fn region_costs(&self) -> Result<AggregatedCostTable, PtxError> {
        let request = self
            .config
            .dashboard
            .sweeps
            .iter()
            .find(|s| s.parameter == Parameter::Region)
            .cloned()
            .unwrap_or_else(|| SweepRequest::new(Parameter::Region));
        let sweep = run_sweep(self.api, self.session.settings(), &request)?;
        Ok(aggregate(&sweep, &self.config.aggregation))
    }
}

/// Render the session's current view
pub fn render(ctx: &ViewContext<'_>) -> Result<Report, PtxError> {
    let view = ctx.session.view();
    tracing::debug!(view = view.name(), "Rendering view");

    match view {
        View::Dashboard => dashboard::render(ctx),
        View::MarketScanning => market::render(ctx),
        View::InputData => input_data::render(ctx),
        View::DeepDiveCountries => deep_dive::render(ctx),
        View::CountryFactSheets
        | View::CertificationSchemes
        | View::Sustainability
        | View::Literature => Ok(context::render(ctx, view)),
        View::Info => info::render(ctx),
    }
}
