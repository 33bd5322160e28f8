use crate::models::HazardLevel;
use serde::Serialize;
use std::sync::Mutex;

/// Process-local assessment counters.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub assessed: usize,
    pub rejected: usize,
    pub safe: usize,
    pub caution: usize,
    pub danger: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_assessment(&self, level: HazardLevel) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.assessed += 1;
            match level {
                HazardLevel::Safe => metrics.safe += 1,
                HazardLevel::Caution => metrics.caution += 1,
                HazardLevel::Danger => metrics.danger += 1,
            }
        }
    }

    pub fn record_rejection(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejected += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
