//! Parameter sweep and cost aggregation module.
//!
//! This module runs one cost calculation per member of a swept dimension and
//! reshapes the long-form results into tables for charting and ranking.
//!
//! # Two-Phase Analysis
//!
//! Calculations are run up-front and the tables are derived afterward:
//!
//! ```ignore
//! use ptxboa_core::analysis::{AggregateOptions, SweepRequest, aggregate, run_sweep};
//! use ptxboa_core::model::{Parameter, SettingsOverrides};
//!
//! // Phase 1: Run calculations (one call per chain)
//! let request = SweepRequest::new(Parameter::Chain)
//!     .with_overrides(SettingsOverrides::new().set(Parameter::OutputUnit, "USD/MWh"));
//! let sweep = run_sweep(&api, &settings, &request)?;
//!
//! // Phase 2: Pivot, total and rank
//! let costs_per_chain = aggregate(&sweep, &AggregateOptions::default());
//! let cheapest = costs_per_chain.cheapest(10);
//! ```
//!
//! # Failure Policy
//!
//! A sweep is all-or-nothing. The first failing calculation aborts it and the
//! error is returned; no partial result is ever produced.

mod aggregate;
mod config;
mod distribution;
mod ranking;
mod sweep;

pub use aggregate::*;
pub use config::*;
pub use distribution::*;
pub use ranking::*;
pub use sweep::*;
