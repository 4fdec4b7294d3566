//! Application tests against the bundled sample dataset
//!
//! Tests are organized by topic:
//! - `config` - Config file parsing and defaults
//! - `session` - Session context transitions and user changes
//! - `views` - Rendering every view end to end

mod common;
mod session;
