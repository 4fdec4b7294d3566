//! Sweep results computed once per session and shared by the views.

use ptxboa_core::analysis::{AggregateOptions, SweepRequest, aggregate, run_sweep};
use ptxboa_core::model::Parameter;
use ptxboa_core::{AggregatedCostTable, CalculationApi, PtxError, ScenarioSettings};

/// An aggregated table and the sweep that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SweptTable {
    pub request: SweepRequest,
    pub table: AggregatedCostTable,
}

impl SweptTable {
    pub fn label(&self) -> String {
        self.request.label()
    }
}

/// All configured sweeps for one set of scenario settings
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResults {
    tables: Vec<SweptTable>,
}

impl SessionResults {
    /// Run every sweep in order. The first failure aborts the whole batch.
    pub fn compute<A>(
        api: &A,
        settings: &ScenarioSettings,
        sweeps: &[SweepRequest],
        options: &AggregateOptions,
    ) -> Result<Self, PtxError>
    where
        A: CalculationApi + ?Sized,
    {
        let tables = sweeps
            .iter()
            .map(|request| {
                let sweep = run_sweep(api, settings, request)?;
                Ok(SweptTable {
                    request: request.clone(),
                    table: aggregate(&sweep, options),
                })
            })
            .collect::<Result<Vec<_>, PtxError>>()?;

        tracing::info!(tables = tables.len(), "Session results computed");
        Ok(Self { tables })
    }

    pub fn tables(&self) -> &[SweptTable] {
        &self.tables
    }

    /// First table sweeping `parameter`
    pub fn by_parameter(&self, parameter: Parameter) -> Option<&SweptTable> {
        self.tables
            .iter()
            .find(|t| t.request.parameter == parameter)
    }

    pub fn total_dropped(&self) -> usize {
        self.tables.iter().map(|t| t.table.dropped().len()).sum()
    }
}
