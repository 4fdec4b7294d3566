//! Lazily loaded calculation API.
//!
//! The dataset is parsed on first access and shared for the rest of the
//! process. Consumers receive `&DatasetApi` and never construct their own.

use std::sync::OnceLock;

use ptxboa_core::DatasetApi;

use crate::config::{ConfigError, DatasetSource};

static GLOBAL: OnceLock<ApiHandle> = OnceLock::new();

/// Accessor for a calculation API built at most once
#[derive(Debug)]
pub struct ApiHandle {
    source: DatasetSource,
    api: OnceLock<DatasetApi>,
}

impl ApiHandle {
    pub fn new(source: DatasetSource) -> Self {
        Self {
            source,
            api: OnceLock::new(),
        }
    }

    /// The process-wide handle; `source` only takes effect on the first call
    pub fn global(source: DatasetSource) -> &'static ApiHandle {
        let handle = GLOBAL.get_or_init(|| ApiHandle::new(source.clone()));
        if handle.source != source {
            tracing::warn!(
                active = %handle.source.describe(),
                requested = %source.describe(),
                "Calculation API already initialized, ignoring new dataset source"
            );
        }
        handle
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.api.get().is_some()
    }

    /// Get the API, loading the dataset on first use
    pub fn get(&self) -> Result<&DatasetApi, ConfigError> {
        if let Some(api) = self.api.get() {
            return Ok(api);
        }

        let dataset = self.source.load()?;
        tracing::info!(source = %self.source.describe(), "Loaded dataset");
        Ok(self.api.get_or_init(|| DatasetApi::new(dataset)))
    }
}
