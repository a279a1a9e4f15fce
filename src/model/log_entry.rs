use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Wall clock, `HH:MM:SS`.
    pub timestamp: String,
    pub message: String,
    #[serde(rename = "type")]
    pub log_type: LogType,
}

#[cfg(test)]
mod tests {
    use super::{LogEntry, LogType};

    #[test]
    fn test_log_entry_json() {
        let entry = LogEntry {
            timestamp: "12:00:01".to_string(),
            message: "ready".to_string(),
            log_type: LogType::Success,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["timestamp"], "12:00:01");
    }
}
