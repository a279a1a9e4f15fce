use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaultType {
    Deadlock,
    CpuOverload,
    MemoryThrashing,
}

impl FaultType {
    pub const DEADLOCK: &'static str = "deadlock";
    pub const CPU_OVERLOAD: &'static str = "cpu_overload";
    pub const MEMORY_THRASHING: &'static str = "memory_thrashing";

    pub const fn as_str(&self) -> &'static str {
        match self {
            FaultType::Deadlock => Self::DEADLOCK,
            FaultType::CpuOverload => Self::CPU_OVERLOAD,
            FaultType::MemoryThrashing => Self::MEMORY_THRASHING,
        }
    }
}

impl Display for FaultType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaultType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::DEADLOCK => Ok(FaultType::Deadlock),
            Self::CPU_OVERLOAD => Ok(FaultType::CpuOverload),
            Self::MEMORY_THRASHING => Ok(FaultType::MemoryThrashing),
            _ => Err(format!("Unknown fault type: {s}")),
        }
    }
}

/// Request body of `inject_fault` and `recover_fault`.
///
/// The name stays a plain string, unknown names must still reach the handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaultRequest {
    #[serde(default)]
    pub fault_type: String,
}

#[cfg(test)]
mod tests {
    use super::FaultType;
    use std::str::FromStr;

    #[test]
    fn test_parse_fault_type() {
        assert_eq!(FaultType::from_str("deadlock"), Ok(FaultType::Deadlock));
        assert_eq!(FaultType::from_str("cpu_overload"), Ok(FaultType::CpuOverload));
        assert_eq!(FaultType::from_str("memory_thrashing"), Ok(FaultType::MemoryThrashing));
        assert!(FaultType::from_str("Deadlock").is_err());
        assert!(FaultType::from_str("").is_err());
        assert_eq!(FaultType::MemoryThrashing.to_string(), "memory_thrashing");
    }
}
