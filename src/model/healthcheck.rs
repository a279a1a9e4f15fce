use serde::{Deserialize, Serialize};

fn is_none_or_blank(value: &Option<String>) -> bool {
    value.as_ref().is_none_or(|v| v.trim().is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Healthcheck {
    pub status: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "is_none_or_blank")]
    pub build_time: Option<String>,
    pub server_time: String,
}
