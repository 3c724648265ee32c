use std::sync::Mutex;
use serde::Serialize;
use crate::chat::TestResult;

#[derive(Debug, Clone, Serialize)]
pub struct HistorySnapshot {
    pub history: Vec<TestResult>,
    pub total: usize,
}

/// Append-only record of completed chats. Lives for the process only.
#[derive(Default)]
pub struct HistoryLog {
    entries: Mutex<Vec<TestResult>>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, result: TestResult) {
        self.lock().push(result);
    }

    pub fn all(&self) -> HistorySnapshot {
        let history = self.lock().clone();
        let total = history.len();
        HistorySnapshot { history, total }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TestResult>> {
        // A panic while pushing cannot leave the Vec half-written.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn result(model: &str) -> TestResult {
        TestResult {
            model: model.to_string(),
            response: "ok".to_string(),
            tokens_used: 10,
            response_time: 0.25,
            cost: 0.0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_record_preserves_order() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        log.record(result("gpt-4"));
        log.record(result("claude-3-haiku"));
        log.record(result("gemini-pro"));

        let snapshot = log.all();
        assert_eq!(snapshot.total, 3);
        let models: Vec<&str> = snapshot.history.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["gpt-4", "claude-3-haiku", "gemini-pro"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let log = HistoryLog::new();
        log.record(result("gpt-4"));
        let snapshot = log.all();
        log.record(result("gpt-4"));
        assert_eq!(snapshot.total, 1);
        assert_eq!(log.len(), 2);
    }
}
