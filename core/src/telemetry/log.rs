use crate::models::HazardLevel;
use crate::prelude::ValidationError;
use log::{debug, warn};

/// Thin wrapper over the `log` facade so every assessment is reported the
/// same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record_assessment(
        &self,
        return_count: usize,
        dominant_index: Option<usize>,
        level: HazardLevel,
        score: f64,
    ) {
        match dominant_index {
            Some(index) => debug!(
                "assessed {} returns -> {} (score {:.3}, dominant #{})",
                return_count, level, score, index
            ),
            None => debug!(
                "assessed {} returns -> {} (score {:.3}, no dominant return)",
                return_count, level, score
            ),
        }
    }

    pub fn record_rejection(&self, error: &ValidationError) {
        warn!("rejected assessment request [{}]: {}", error.kind(), error);
    }
}
