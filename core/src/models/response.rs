use crate::models::level::HazardLevel;
use crate::models::radar_return::{coerce_return, RadarReturn, ReturnInput};
use crate::prelude::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssessmentResponse")]
pub struct HazardAssessmentResponse {
    hazard_level: HazardLevel,
    score: f64,
    dominant_return: Option<RadarReturn>,
}

impl HazardAssessmentResponse {
    pub fn new(
        hazard_level: HazardLevel,
        score: f64,
        dominant_return: Option<RadarReturn>,
    ) -> ValidationResult<Self> {
        if !score.is_finite() || score < 0.0 {
            return Err(ValidationError::out_of_range(
                "score",
                format!("must be finite and non-negative, got {score}"),
            ));
        }
        Ok(Self {
            hazard_level,
            score,
            dominant_return,
        })
    }

    /// Skips the score check for callers that already guarantee it.
    pub(crate) fn from_parts(
        hazard_level: HazardLevel,
        score: f64,
        dominant_return: Option<RadarReturn>,
    ) -> Self {
        debug_assert!(score.is_finite() && score >= 0.0);
        Self {
            hazard_level,
            score,
            dominant_return,
        }
    }

    pub fn hazard_level(&self) -> HazardLevel {
        self.hazard_level
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// `None` when no return scored above zero.
    pub fn dominant_return(&self) -> Option<&RadarReturn> {
        self.dominant_return.as_ref()
    }
}

/// Response body as decoded from the wire, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAssessmentResponse {
    pub hazard_level: HazardLevel,
    pub score: f64,
    #[serde(default)]
    pub dominant_return: Option<ReturnInput>,
}

impl TryFrom<RawAssessmentResponse> for HazardAssessmentResponse {
    type Error = ValidationError;

    fn try_from(raw: RawAssessmentResponse) -> ValidationResult<Self> {
        let dominant_return = raw
            .dominant_return
            .map(|input| coerce_return("dominant_return", input))
            .transpose()?;
        HazardAssessmentResponse::new(raw.hazard_level, raw.score, dominant_return)
    }
}
