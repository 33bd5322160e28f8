use crate::workflow::config::ServiceConfig;
use anyhow::Context;
use hazardcore::models::{HazardAssessmentResponse, RawAssessmentRequest, RequestDefaults};
use hazardcore::prelude::{Assess, ValidationError};
use hazardcore::scoring::HazardScorer;
use hazardcore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Validates raw requests, scores them and keeps the counters current.
#[derive(Clone)]
pub struct Runner {
    assessor: Arc<dyn Assess>,
    defaults: RequestDefaults,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: &ServiceConfig) -> Self {
        Self::with_assessor(Arc::new(HazardScorer::new(config.scorer)), config.defaults)
    }

    pub fn with_assessor(assessor: Arc<dyn Assess>, defaults: RequestDefaults) -> Self {
        Self {
            assessor,
            defaults,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: LogManager::new(),
        }
    }

    pub fn execute(
        &self,
        raw: RawAssessmentRequest,
    ) -> Result<HazardAssessmentResponse, ValidationError> {
        let request = raw.validate(&self.defaults).map_err(|err| {
            self.logger.record_rejection(&err);
            self.metrics.record_rejection();
            err
        })?;

        let response = self.assessor.assess(&request);
        self.metrics.record_assessment(response.hazard_level());
        Ok(response)
    }

    /// Reads one JSON request from disk and assesses it.
    pub fn execute_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<HazardAssessmentResponse> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading request {}", path_ref.display()))?;
        let raw: RawAssessmentRequest = serde_json::from_str(&contents)
            .with_context(|| format!("decoding request {}", path_ref.display()))?;
        self.execute(raw)
            .with_context(|| format!("validating request {}", path_ref.display()))
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
