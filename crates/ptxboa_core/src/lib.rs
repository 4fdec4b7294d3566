//! PtX cost aggregation library
//!
//! This crate provides the result-aggregation pipeline behind the PtX Business
//! Opportunity Analyzer. It supports:
//! - Typed scenario settings and dimension lookups
//! - Parameter sweeps that call a cost calculation once per dimension member
//! - Pivoting long-form cost line items into per-value cost tables with totals
//! - Ranking and selection helpers for presenting the aggregated tables
//! - An in-memory, dataset-backed implementation of the calculation API
//!
//! # Example
//!
//! ```ignore
//! use ptxboa_core::analysis::{AggregateOptions, SweepRequest, aggregate, run_sweep};
//! use ptxboa_core::model::Parameter;
//!
//! let sweep = run_sweep(&api, &settings, &SweepRequest::new(Parameter::Region))?;
//! let costs_per_region = aggregate(&sweep, &AggregateOptions::default());
//! let shortlist = costs_per_region.cheapest(10);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod api;
pub mod dataset;
pub mod error;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{AggregateOptions, AggregatedCostTable, SweepRequest, SweepResult};
pub use api::CalculationApi;
pub use dataset::{Dataset, DatasetApi};
pub use error::{CalculationError, PtxError};
pub use model::{Dimension, Parameter, ScenarioSettings, SettingsOverrides};
