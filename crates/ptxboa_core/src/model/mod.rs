mod cost;
mod dimension;
mod input;
mod settings;

pub use cost::{CostResult, LEVELIZED_COST};
pub use dimension::{Dimension, DimensionMember, DimensionTable, REGION_NAME_KEY};
pub use input::{InputRecord, InputTable};
pub use settings::{Parameter, ScenarioSettings, SettingsOverrides};
