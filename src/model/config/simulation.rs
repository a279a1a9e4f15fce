use crate::error::{fatal_err, SimError};
use std::time::Duration;

#[derive(Debug, Copy, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSourceType {
    #[default]
    Host,
    Synthetic,
}

pub const MAX_SNAPSHOT_LIMIT: usize = 10;
pub const MAX_LOG_CAPACITY: usize = 50;

const fn default_snapshot_limit() -> usize { MAX_SNAPSHOT_LIMIT }
const fn default_snapshot_timeout_millis() -> u64 { 3000 }
const fn default_tick_interval_secs() -> u64 { 5 }
const fn default_log_capacity() -> usize { MAX_LOG_CAPACITY }
const fn default_log_page_size() -> usize { 20 }

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    #[serde(default)]
    pub snapshot_source: SnapshotSourceType,
    #[serde(default = "default_snapshot_limit")]
    pub snapshot_limit: usize,
    #[serde(default = "default_snapshot_timeout_millis")]
    pub snapshot_timeout_millis: u64,
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
    #[serde(default = "default_log_page_size")]
    pub log_page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            snapshot_source: SnapshotSourceType::default(),
            snapshot_limit: default_snapshot_limit(),
            snapshot_timeout_millis: default_snapshot_timeout_millis(),
            tick_interval_secs: default_tick_interval_secs(),
            log_capacity: default_log_capacity(),
            log_page_size: default_log_page_size(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn prepare(&mut self) -> Result<(), SimError> {
        if self.snapshot_limit == 0 || self.snapshot_limit > MAX_SNAPSHOT_LIMIT {
            return Err(fatal_err!("simulation.snapshot_limit must be between 1 and {MAX_SNAPSHOT_LIMIT}"));
        }
        if self.tick_interval_secs == 0 {
            return Err(fatal_err!("simulation.tick_interval_secs must be greater than 0"));
        }
        if self.log_capacity == 0 || self.log_capacity > MAX_LOG_CAPACITY {
            return Err(fatal_err!("simulation.log_capacity must be between 1 and {MAX_LOG_CAPACITY}"));
        }
        if self.log_page_size > self.log_capacity {
            self.log_page_size = self.log_capacity;
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    pub fn snapshot_timeout(&self) -> Duration {
        Duration::from_millis(self.snapshot_timeout_millis)
    }
}
