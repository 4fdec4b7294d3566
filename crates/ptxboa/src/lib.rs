//! PtX Business Opportunity Analyzer application
//!
//! Loads a techno-economic dataset, keeps an immutable session context and
//! renders the analyzer's views as text, JSON or YAML reports.

// ============================================================================
// Application modules
// ============================================================================

pub mod config;
pub mod handle;
pub mod logging;
pub mod results;
pub mod session;
pub mod views;

// ============================================================================
// Output modules
// ============================================================================

pub mod format;
pub mod report;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{AppConfig, DatasetSource};
pub use handle::ApiHandle;
pub use logging::init_logging;
pub use report::{OutputFormat, Report, render};
pub use session::SessionContext;
pub use views::{View, ViewContext};
