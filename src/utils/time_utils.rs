use chrono::{DateTime, Local, Utc};

const BUILD_TIMESTAMP: Option<&str> = option_env!("VERGEN_BUILD_TIMESTAMP");

pub fn get_server_time() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

pub fn get_build_time() -> Option<String> {
    BUILD_TIMESTAMP
        .and_then(|ts| ts.parse::<DateTime<Utc>>().ok())
        .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S %Z").to_string())
}

/// Clock time used on event log entries.
pub fn get_log_timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use crate::utils::get_log_timestamp;

    #[test]
    fn test_log_timestamp_format() {
        let ts = get_log_timestamp();
        assert_eq!(ts.len(), 8);
        let parts: Vec<&str> = ts.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));
    }
}
