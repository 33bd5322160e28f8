use crate::models::{
    HazardAssessmentRequest, HazardAssessmentResponse, HazardLevel, RadarReturn, MAX_INTENSITY_DBZ,
    MIN_INTENSITY_DBZ,
};
use crate::prelude::Assess;
use crate::scoring::config::ScorerConfig;
use crate::telemetry::log::LogManager;

/// Factor breakdown for a single return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnScore {
    /// 0 at or beyond the distance threshold, approaching 1 at zero range.
    pub proximity: f64,
    /// Speed relative to the velocity threshold; unbounded.
    pub velocity: f64,
    /// Intensity mapped from [-30, 90] dBZ onto [0, 1].
    pub intensity: f64,
    /// Weighted sum of the three factors, saturating at `f64::MAX`.
    pub total: f64,
}

/// Stateless hazard scorer. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct HazardScorer {
    config: ScorerConfig,
    logger: LogManager,
}

impl HazardScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self {
            config,
            logger: LogManager::new(),
        }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn score_return(
        &self,
        radar_return: &RadarReturn,
        request: &HazardAssessmentRequest,
    ) -> ReturnScore {
        let weights = &self.config.weights;
        let distance_threshold = request.distance_threshold_m();

        let proximity =
            (distance_threshold - radar_return.distance_m()).max(0.0) / distance_threshold;
        let velocity = radar_return.radial_velocity_ms().abs() / request.velocity_threshold_ms();
        let intensity = (radar_return.intensity_dbz() - MIN_INTENSITY_DBZ)
            / (MAX_INTENSITY_DBZ - MIN_INTENSITY_DBZ);

        let total = (proximity * weights.distance
            + velocity * weights.velocity
            + intensity * weights.intensity)
            .min(f64::MAX);

        ReturnScore {
            proximity,
            velocity,
            intensity,
            total,
        }
    }

    pub fn classify(&self, score: f64) -> HazardLevel {
        let levels = &self.config.levels;
        if score >= levels.danger {
            HazardLevel::Danger
        } else if score >= levels.caution {
            HazardLevel::Caution
        } else {
            HazardLevel::Safe
        }
    }

    /// Scores every return and classifies the highest total.
    ///
    /// A return becomes dominant only when it beats the running maximum
    /// strictly, so the first of several equal totals wins and a batch that
    /// scores exactly zero has no dominant return.
    pub fn assess(&self, request: &HazardAssessmentRequest) -> HazardAssessmentResponse {
        let mut max_score = 0.0;
        let mut dominant: Option<(usize, &RadarReturn)> = None;

        for (index, radar_return) in request.returns().iter().enumerate() {
            let total = self.score_return(radar_return, request).total;
            if total > max_score {
                max_score = total;
                dominant = Some((index, radar_return));
            }
        }

        let level = self.classify(max_score);
        self.logger.record_assessment(
            request.returns().len(),
            dominant.map(|(index, _)| index),
            level,
            max_score,
        );

        HazardAssessmentResponse::from_parts(
            level,
            max_score,
            dominant.map(|(_, radar_return)| radar_return.clone()),
        )
    }
}

impl Assess for HazardScorer {
    fn assess(&self, request: &HazardAssessmentRequest) -> HazardAssessmentResponse {
        HazardScorer::assess(self, request)
    }
}
