//! Shared fixtures for application tests

use ptxboa_core::DatasetApi;

use crate::config::{AppConfig, DatasetSource};
use crate::handle::ApiHandle;
use crate::report::{Cell, Report, Section};
use crate::session::SessionContext;
use crate::views::{View, ViewContext, render};

pub fn bundled_api() -> DatasetApi {
    match ApiHandle::new(DatasetSource::Bundled).get() {
        Ok(api) => api.clone(),
        Err(e) => panic!("bundled dataset failed to load: {e}"),
    }
}

pub fn render_view(config: &AppConfig, session: &SessionContext, view: View) -> Report {
    let api = bundled_api();
    let session = session.with_view(view);
    let ctx = ViewContext {
        api: &api,
        session: &session,
        config,
    };
    render(&ctx).unwrap()
}

pub fn default_session(config: &AppConfig) -> SessionContext {
    SessionContext::new(config.settings.clone()).with_top(config.dashboard.top)
}

/// The table section with the given heading
pub fn table<'a>(report: &'a Report, heading: &str) -> &'a Section {
    report
        .sections
        .iter()
        .find(|s| matches!(s, Section::Table { heading: h, .. } if h == heading))
        .unwrap_or_else(|| panic!("no table {heading:?} in {report:#?}"))
}

/// First column of a table section
pub fn index_of(section: &Section) -> Vec<String> {
    match section {
        Section::Table { rows, .. } => rows
            .iter()
            .map(|row| match &row[0] {
                Cell::Text(s) => s.clone(),
                Cell::Number(v) => v.to_string(),
            })
            .collect(),
        other => panic!("not a table: {other:?}"),
    }
}

/// The last cell of the row whose first cell is `index`
pub fn total_of(section: &Section, index: &str) -> f64 {
    let Section::Table { rows, .. } = section else {
        panic!("not a table: {section:?}");
    };
    let row = rows
        .iter()
        .find(|row| row[0] == Cell::Text(index.to_string()))
        .unwrap_or_else(|| panic!("no row {index:?}"));
    match row.last() {
        Some(Cell::Number(v)) => *v,
        other => panic!("no numeric total: {other:?}"),
    }
}

pub fn notices(report: &Report) -> Vec<&str> {
    report
        .sections
        .iter()
        .filter_map(|s| match s {
            Section::Notice { message } => Some(message.as_str()),
            _ => None,
        })
        .collect()
}
