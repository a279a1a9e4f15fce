use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const CPU_MIN: f64 = 0.0;
pub const CPU_MAX: f64 = 100.0;
pub const MEMORY_MIN: f64 = 0.0;
pub const MEMORY_MAX: f64 = 100.0;
pub const PRIORITY_MIN: u8 = 1;
pub const PRIORITY_MAX: u8 = 5;

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessState {
    Running,
    Ready,
    Waiting,
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProcessState::Running => "RUNNING",
            ProcessState::Ready => "READY",
            ProcessState::Waiting => "WAITING",
        };
        f.write_str(name)
    }
}

/// One simulated or sampled OS process.
///
/// `memory` is a percentage of host RAM for this record alone. The values of a
/// table are not normalised against each other, the sum may exceed 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu: f64,
    pub memory: f64,
    pub state: ProcessState,
    pub priority: u8,
    pub burst_time: u32,
}

impl ProcessRecord {
    /// A record without a pid or a printable name can't be shown or addressed.
    pub fn is_usable(&self) -> bool {
        self.pid > 0 && !self.name.trim().is_empty()
    }

    /// Pulls sampled values back into their documented ranges.
    pub fn normalize(&mut self) {
        self.cpu = clamp_or(self.cpu, CPU_MIN, CPU_MAX);
        self.memory = clamp_or(self.memory, MEMORY_MIN, MEMORY_MAX);
        self.priority = self.priority.clamp(PRIORITY_MIN, PRIORITY_MAX);
    }
}

fn clamp_or(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProcessRecord, ProcessState};

    fn record(pid: u32, name: &str) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: name.to_string(),
            cpu: 10.0,
            memory: 10.0,
            state: ProcessState::Ready,
            priority: 3,
            burst_time: 4,
        }
    }

    #[test]
    fn test_state_serializes_uppercase() {
        let json = serde_json::to_value(record(1, "init")).unwrap();
        assert_eq!(json["state"], "READY");
        assert_eq!(json["burst_time"], 4);
        assert_eq!(ProcessState::Waiting.to_string(), "WAITING");
    }

    #[test]
    fn test_usable() {
        assert!(record(1, "init").is_usable());
        assert!(!record(0, "idle").is_usable());
        assert!(!record(7, "  ").is_usable());
    }

    #[test]
    fn test_normalize() {
        let mut rec = record(1, "init");
        rec.cpu = 180.0;
        rec.memory = f64::NAN;
        rec.priority = 0;
        rec.normalize();
        assert!((rec.cpu - 100.0).abs() < f64::EPSILON);
        assert!(rec.memory.abs() < f64::EPSILON);
        assert_eq!(rec.priority, 1);
    }
}
