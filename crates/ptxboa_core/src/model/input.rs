use serde::{Deserialize, Serialize};

/// A raw techno-economic input parameter of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub source_region_code: String,
    pub process_code: String,
    pub parameter_code: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
}

/// Input parameters of one scenario
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputTable {
    records: Vec<InputRecord>,
}

impl InputTable {
    pub fn new(records: Vec<InputRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InputRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching all given filters. An empty filter slice matches everything.
    pub fn filter<'a>(
        &'a self,
        regions: &'a [String],
        parameter_codes: &'a [&str],
        process_codes: &'a [&str],
    ) -> impl Iterator<Item = &'a InputRecord> + 'a {
        self.records.iter().filter(move |r| {
            (regions.is_empty() || regions.contains(&r.source_region_code))
                && (parameter_codes.is_empty()
                    || parameter_codes.contains(&r.parameter_code.as_str()))
                && (process_codes.is_empty() || process_codes.contains(&r.process_code.as_str()))
        })
    }

    /// Values of `parameter_code` for `process_code` across `regions`
    pub fn values_for(&self, regions: &[String], parameter_code: &str, process_code: &str) -> Vec<f64> {
        self.filter(regions, &[parameter_code], &[process_code])
            .map(|r| r.value)
            .collect()
    }
}
