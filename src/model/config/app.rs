use crate::error::SimError;
use crate::model::{AlgorithmsConfig, ConfigApi, LogConfig, SimulationConfig};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub api: ConfigApi,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub algorithms: AlgorithmsConfig,
}

impl Config {
    pub fn prepare(&mut self) -> Result<(), SimError> {
        self.api.prepare()?;
        self.simulation.prepare()?;
        self.algorithms.prepare()?;
        Ok(())
    }
}
