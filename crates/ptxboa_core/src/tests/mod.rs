//! Integration tests for the sweep and aggregation pipeline
//!
//! Tests are organized by topic:
//! - `common` - Scripted calculation backend and settings fixtures
//! - `sweep` - Sweep runner ordering, validation and failure policy
//! - `aggregate` - Pivot, totals and zero-total filtering
//! - `ranking` - Cheapest, select and sort helpers
//! - `end_to_end` - Full sweep → table scenarios
//! - `dataset` - Rule-table calculation backend

mod common;
mod sweep;
