use serde::{Deserialize, Serialize};

pub const STATUS_ONLINE: &str = "ONLINE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemStatus {
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub process_count: usize,
    pub status: String,
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self {
            cpu_usage: 0.0,
            memory_usage: 0.0,
            process_count: 0,
            status: STATUS_ONLINE.to_string(),
        }
    }
}
