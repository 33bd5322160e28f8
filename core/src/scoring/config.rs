use crate::prelude::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

pub const DISTANCE_WEIGHT: f64 = 1.5;
pub const VELOCITY_WEIGHT: f64 = 1.0;
pub const INTENSITY_WEIGHT: f64 = 1.2;

/// Lower bound of the caution band.
pub const CAUTION_SCORE: f64 = 1.2;
/// Lower bound of the danger band.
pub const DANGER_SCORE: f64 = 2.5;

/// Multipliers applied to each normalized factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub distance: f64,
    pub velocity: f64,
    pub intensity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            distance: DISTANCE_WEIGHT,
            velocity: VELOCITY_WEIGHT,
            intensity: INTENSITY_WEIGHT,
        }
    }
}

/// Inclusive lower bounds of the caution and danger bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelThresholds {
    pub caution: f64,
    pub danger: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            caution: CAUTION_SCORE,
            danger: DANGER_SCORE,
        }
    }
}

/// Tunable parameters of [`HazardScorer`](crate::scoring::HazardScorer).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub weights: ScoringWeights,
    pub levels: LevelThresholds,
}

impl ScorerConfig {
    /// Weights must be finite and non-negative; band bounds positive and
    /// strictly increasing.
    pub fn validate(&self) -> ValidationResult<()> {
        for (field, weight) in [
            ("weights.distance", self.weights.distance),
            ("weights.velocity", self.weights.velocity),
            ("weights.intensity", self.weights.intensity),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ValidationError::out_of_range(
                    field,
                    format!("must be a finite non-negative number, got {weight}"),
                ));
            }
        }

        let LevelThresholds { caution, danger } = self.levels;
        if !caution.is_finite() || caution <= 0.0 {
            return Err(ValidationError::out_of_range(
                "levels.caution",
                format!("must be positive, got {caution}"),
            ));
        }
        if !danger.is_finite() || danger <= caution {
            return Err(ValidationError::out_of_range(
                "levels.danger",
                format!("must exceed levels.caution ({caution}), got {danger}"),
            ));
        }
        Ok(())
    }
}
