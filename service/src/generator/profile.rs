use anyhow::Context;
use chrono::{Duration, TimeZone, Utc};
use hazardcore::models::{
    RawAssessmentRequest, RawRadarReturn, ReturnInput, TimestampInput, MAX_INTENSITY_DBZ,
    MIN_INTENSITY_DBZ,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const MIN_DISTANCE_M: f64 = 1.0;

/// Configuration for generating a synthetic batch of radar returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub max_distance_m: f64,
    pub max_speed_ms: f64,
    pub interval_ms: i64,
    pub distance_threshold_m: Option<f64>,
    pub velocity_threshold_ms: Option<f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 16,
            seed: 0,
            max_distance_m: 1_500.0,
            max_speed_ms: 40.0,
            interval_ms: 250,
            distance_threshold_m: None,
            velocity_threshold_ms: None,
        }
    }
}

impl GeneratorConfig {
    fn normalized_count(&self) -> usize {
        self.count.max(1)
    }

    fn normalized_distance(&self) -> f64 {
        self.max_distance_m.max(MIN_DISTANCE_M)
    }
}

fn build_returns(config: &GeneratorConfig) -> anyhow::Result<Vec<ReturnInput>> {
    anyhow::ensure!(
        config.max_distance_m.is_finite() && config.max_speed_ms.is_finite(),
        "generator ranges must be finite"
    );

    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .context("building generator epoch")?;
    let max_distance = config.normalized_distance();
    let max_speed = config.max_speed_ms.abs();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut returns = Vec::with_capacity(config.normalized_count());

    for index in 0..config.normalized_count() {
        let offset_ms = (index as i64)
            .checked_mul(config.interval_ms)
            .context("overflow computing generator timestamp offset")?;
        let timestamp = start
            .checked_add_signed(Duration::milliseconds(offset_ms))
            .context("generator timestamp out of range")?;

        returns.push(ReturnInput::Raw(RawRadarReturn {
            timestamp: TimestampInput::from(timestamp),
            distance_m: rng.gen_range(MIN_DISTANCE_M..=max_distance),
            radial_velocity_ms: rng.gen_range(-max_speed..=max_speed),
            intensity_dbz: rng.gen_range(MIN_INTENSITY_DBZ..=MAX_INTENSITY_DBZ),
        }));
    }

    Ok(returns)
}

pub fn build_request_from_config(config: &GeneratorConfig) -> anyhow::Result<RawAssessmentRequest> {
    Ok(RawAssessmentRequest {
        returns: build_returns(config)?,
        distance_threshold_m: config.distance_threshold_m,
        velocity_threshold_ms: config.velocity_threshold_ms,
    })
}

pub fn build_request(count: usize, seed: u64) -> anyhow::Result<RawAssessmentRequest> {
    let config = GeneratorConfig {
        count,
        seed,
        ..Default::default()
    };
    build_request_from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazardcore::models::RequestDefaults;

    #[test]
    fn generator_builds_expected_return_count() {
        let raw = build_request(32, 3).unwrap();
        assert_eq!(raw.returns.len(), 32);
        let request = raw.validate(&RequestDefaults::default()).unwrap();
        assert_eq!(request.returns().len(), 32);
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        assert_eq!(build_request(8, 42).unwrap(), build_request(8, 42).unwrap());
        assert_ne!(build_request(8, 42).unwrap(), build_request(8, 43).unwrap());
    }

    #[test]
    fn generator_spaces_timestamps() {
        let config = GeneratorConfig {
            count: 3,
            interval_ms: 1_000,
            distance_threshold_m: Some(400.0),
            ..Default::default()
        };
        let request = build_request_from_config(&config)
            .unwrap()
            .validate(&RequestDefaults::default())
            .unwrap();
        let stamps: Vec<_> = request.returns().iter().map(|r| r.timestamp()).collect();
        assert_eq!((stamps[1] - stamps[0]).num_seconds(), 1);
        assert_eq!((stamps[2] - stamps[1]).num_seconds(), 1);
        assert_eq!(request.distance_threshold_m(), 400.0);
    }

    #[test]
    fn generator_clamps_degenerate_ranges() {
        let config = GeneratorConfig {
            count: 0,
            max_distance_m: 0.0,
            max_speed_ms: 0.0,
            ..Default::default()
        };
        let raw = build_request_from_config(&config).unwrap();
        assert_eq!(raw.returns.len(), 1);
        assert!(raw.validate(&RequestDefaults::default()).is_ok());
    }

    #[test]
    fn generator_rejects_non_finite_ranges() {
        let config = GeneratorConfig {
            max_speed_ms: f64::NAN,
            ..Default::default()
        };
        assert!(build_request_from_config(&config).is_err());
    }
}
