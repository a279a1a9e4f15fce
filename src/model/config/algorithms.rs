use crate::error::{fatal_err, SimError};

const fn default_time_quantum() -> u32 { 3 }
const fn default_page_frames() -> usize { 5 }
fn default_page_references() -> Vec<u32> { vec![1, 3, 0, 3, 5, 6, 3, 0, 1, 2] }
const fn default_bankers_available() -> u32 { 10 }

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AlgorithmsConfig {
    #[serde(default = "default_time_quantum")]
    pub time_quantum: u32,
    #[serde(default = "default_page_frames")]
    pub page_frames: usize,
    #[serde(default = "default_page_references")]
    pub page_references: Vec<u32>,
    #[serde(default = "default_bankers_available")]
    pub bankers_available: u32,
}

impl Default for AlgorithmsConfig {
    fn default() -> Self {
        Self {
            time_quantum: default_time_quantum(),
            page_frames: default_page_frames(),
            page_references: default_page_references(),
            bankers_available: default_bankers_available(),
        }
    }
}

impl AlgorithmsConfig {
    pub fn prepare(&mut self) -> Result<(), SimError> {
        if self.time_quantum == 0 {
            return Err(fatal_err!("algorithms.time_quantum must be greater than 0"));
        }
        if self.page_frames == 0 {
            return Err(fatal_err!("algorithms.page_frames must be greater than 0"));
        }
        if self.page_references.is_empty() {
            self.page_references = default_page_references();
        }
        Ok(())
    }
}
