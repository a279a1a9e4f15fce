use crate::model::{LogEntry, LogType};
use crate::utils::get_log_timestamp;
use std::collections::VecDeque;

pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// Newest first, bounded ring of human readable transition events.
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, DEFAULT_LOG_CAPACITY);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn append(&mut self, message: impl Into<String>, log_type: LogType) {
        self.push(LogEntry {
            timestamp: get_log_timestamp(),
            message: message.into(),
            log_type,
        });
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    pub fn recent(&self, count: usize) -> Vec<LogEntry> {
        self.entries.iter().take(count).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::{EventLog, DEFAULT_LOG_CAPACITY};
    use crate::model::LogType;

    #[test]
    fn test_newest_first() {
        let mut log = EventLog::default();
        log.append("first", LogType::Info);
        log.append("second", LogType::Error);
        let recent = log.recent(20);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "second");
        assert_eq!(recent[0].log_type, LogType::Error);
        assert_eq!(recent[1].message, "first");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = EventLog::default();
        for i in 0..51 {
            log.append(format!("event {i}"), LogType::Info);
        }
        assert_eq!(log.len(), 50);
        let all = log.recent(100);
        assert_eq!(all[0].message, "event 50");
        assert_eq!(all[49].message, "event 1");
        assert!(all.iter().all(|e| e.message != "event 0"));
    }

    #[test]
    fn test_size_is_min_of_appends_and_capacity() {
        for appends in [0usize, 1, 49, 50, 51, 120] {
            let mut log = EventLog::new(50);
            for i in 0..appends {
                log.append(i.to_string(), LogType::Success);
            }
            assert_eq!(log.len(), appends.min(50));
            if appends > 0 {
                assert_eq!(log.recent(1)[0].message, (appends - 1).to_string());
            }
        }
    }

    #[test]
    fn test_capacity_never_exceeds_default() {
        let mut log = EventLog::new(200);
        assert_eq!(log.capacity(), DEFAULT_LOG_CAPACITY);
        for i in 0..120 {
            log.append(i.to_string(), LogType::Info);
        }
        assert_eq!(log.len(), DEFAULT_LOG_CAPACITY);
    }

    #[test]
    fn test_recent_does_not_mutate() {
        let mut log = EventLog::new(5);
        for i in 0..5 {
            log.append(i.to_string(), LogType::Warning);
        }
        assert_eq!(log.recent(2).len(), 2);
        assert_eq!(log.len(), 5);
        assert_eq!(log.capacity(), 5);
    }
}
