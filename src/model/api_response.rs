use crate::model::{AlgorithmReport, LogEntry, ProcessRecord, SystemStatus};
use serde::Serialize;

pub const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessesResponse {
    pub processes: Vec<ProcessRecord>,
    pub system_status: SystemStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmsResponse {
    pub algorithms: AlgorithmReport,
}
