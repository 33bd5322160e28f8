use crate::models::radar_return::{coerce_return, RadarReturn, ReturnInput};
use crate::prelude::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DISTANCE_THRESHOLD_M: f64 = 500.0;
pub const DEFAULT_VELOCITY_THRESHOLD_MS: f64 = 25.0;

/// Thresholds applied when a request leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestDefaults {
    pub distance_threshold_m: f64,
    pub velocity_threshold_ms: f64,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            distance_threshold_m: DEFAULT_DISTANCE_THRESHOLD_M,
            velocity_threshold_ms: DEFAULT_VELOCITY_THRESHOLD_MS,
        }
    }
}

impl RequestDefaults {
    pub fn validate(&self) -> ValidationResult<()> {
        check_threshold("distance_threshold_m", self.distance_threshold_m)?;
        check_threshold("velocity_threshold_ms", self.velocity_threshold_ms)
    }
}

/// One validated scoring job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssessmentRequest")]
pub struct HazardAssessmentRequest {
    returns: Vec<RadarReturn>,
    distance_threshold_m: f64,
    velocity_threshold_ms: f64,
}

impl HazardAssessmentRequest {
    /// Coerces every element, then checks the collection and thresholds.
    /// The first failing element is reported.
    pub fn new<I>(
        returns: I,
        distance_threshold_m: f64,
        velocity_threshold_ms: f64,
    ) -> ValidationResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<ReturnInput>,
    {
        let returns = returns
            .into_iter()
            .enumerate()
            .map(|(index, item)| coerce_return(format!("returns[{index}]"), item.into()))
            .collect::<ValidationResult<Vec<_>>>()?;

        if returns.is_empty() {
            return Err(ValidationError::EmptyCollection { field: "returns" });
        }
        check_threshold("distance_threshold_m", distance_threshold_m)?;
        check_threshold("velocity_threshold_ms", velocity_threshold_ms)?;

        if let Some(index) = returns
            .iter()
            .position(|r| !(r.radial_velocity_ms().abs() / velocity_threshold_ms).is_finite())
        {
            return Err(ValidationError::out_of_range(
                "radial_velocity_ms",
                format!(
                    "returns[{index}] speed {} overflows against velocity_threshold_ms {velocity_threshold_ms}",
                    returns[index].radial_velocity_ms()
                ),
            ));
        }

        Ok(Self {
            returns,
            distance_threshold_m,
            velocity_threshold_ms,
        })
    }

    pub fn with_default_thresholds<I>(returns: I) -> ValidationResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<ReturnInput>,
    {
        Self::new(
            returns,
            DEFAULT_DISTANCE_THRESHOLD_M,
            DEFAULT_VELOCITY_THRESHOLD_MS,
        )
    }

    /// Never empty.
    pub fn returns(&self) -> &[RadarReturn] {
        &self.returns
    }

    pub fn distance_threshold_m(&self) -> f64 {
        self.distance_threshold_m
    }

    pub fn velocity_threshold_ms(&self) -> f64 {
        self.velocity_threshold_ms
    }
}

/// Request body as decoded from the wire, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAssessmentRequest {
    pub returns: Vec<ReturnInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_threshold_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity_threshold_ms: Option<f64>,
}

impl RawAssessmentRequest {
    pub fn validate(self, defaults: &RequestDefaults) -> ValidationResult<HazardAssessmentRequest> {
        HazardAssessmentRequest::new(
            self.returns,
            self.distance_threshold_m
                .unwrap_or(defaults.distance_threshold_m),
            self.velocity_threshold_ms
                .unwrap_or(defaults.velocity_threshold_ms),
        )
    }
}

impl TryFrom<RawAssessmentRequest> for HazardAssessmentRequest {
    type Error = ValidationError;

    fn try_from(raw: RawAssessmentRequest) -> ValidationResult<Self> {
        raw.validate(&RequestDefaults::default())
    }
}

fn check_threshold(field: &'static str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::out_of_range(
            field,
            format!("must be a finite positive number, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(distance_m: f64) -> RadarReturn {
        RadarReturn::new("2024-03-26T00:00:00Z", distance_m, 10.0, 30.0).unwrap()
    }

    #[test]
    fn applies_default_thresholds() {
        let request = HazardAssessmentRequest::with_default_thresholds([sample(400.0)]).unwrap();
        assert_eq!(request.distance_threshold_m(), 500.0);
        assert_eq!(request.velocity_threshold_ms(), 25.0);
        assert_eq!(request.returns().len(), 1);
    }

    #[test]
    fn rejects_empty_returns() {
        let err = HazardAssessmentRequest::with_default_thresholds(Vec::<RadarReturn>::new())
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyCollection { field: "returns" });
    }

    #[test]
    fn rejects_non_positive_thresholds() {
        let err = HazardAssessmentRequest::new([sample(1.0)], 0.0, 25.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "distance_threshold_m",
                ..
            }
        ));

        let err = HazardAssessmentRequest::new([sample(1.0)], 500.0, -2.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "velocity_threshold_ms",
                ..
            }
        ));
    }

    #[test]
    fn rejects_infinite_thresholds() {
        for (distance, velocity) in [(f64::INFINITY, 25.0), (500.0, f64::INFINITY)] {
            let err = HazardAssessmentRequest::new([sample(1.0)], distance, velocity).unwrap_err();
            assert_eq!(err.kind(), "out_of_range");
        }
    }

    #[test]
    fn rejects_velocity_factor_overflow() {
        let fast = RadarReturn::new("2024-03-26T00:00:00Z", 10.0, 1e300, 0.0).unwrap();
        let err = HazardAssessmentRequest::new([sample(10.0), fast], 500.0, 1e-10).unwrap_err();
        match err {
            ValidationError::OutOfRange { field, reason } => {
                assert_eq!(field, "radial_velocity_ms");
                assert!(reason.starts_with("returns[1]"), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }

        assert!(HazardAssessmentRequest::new([sample(10.0)], 500.0, 1e-10).is_ok());
    }

    #[test]
    fn raw_request_rejects_unknown_keys() {
        let result = serde_json::from_value::<RawAssessmentRequest>(json!({
            "returns": [],
            "distance_threshold": 400
        }));
        assert!(result.is_err());
    }

    #[test]
    fn mixes_validated_and_raw_elements() {
        let request = HazardAssessmentRequest::with_default_thresholds([
            ReturnInput::from(sample(120.0)),
            ReturnInput::from(json!({
                "timestamp": "2024-03-26T00:00:01Z",
                "distance_m": 80,
                "radial_velocity_ms": -4,
                "intensity_dbz": 20
            })),
        ])
        .unwrap();
        assert_eq!(request.returns()[0].distance_m(), 120.0);
        assert_eq!(request.returns()[1].distance_m(), 80.0);
    }

    #[test]
    fn reports_first_bad_element() {
        let err = HazardAssessmentRequest::with_default_thresholds([
            ReturnInput::from(sample(10.0)),
            ReturnInput::from(json!("not a return")),
            ReturnInput::from(json!(42)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidElementType {
                field: "returns[1]".into(),
                shape: "a string".into(),
            }
        );
    }

    #[test]
    fn raw_request_uses_supplied_defaults() {
        let raw: RawAssessmentRequest = serde_json::from_value(json!({
            "returns": [{
                "timestamp": "2024-03-26T00:00:00+00:00",
                "distance_m": 200,
                "radial_velocity_ms": 30,
                "intensity_dbz": 50
            }],
            "velocity_threshold_ms": 20
        }))
        .unwrap();
        let defaults = RequestDefaults {
            distance_threshold_m: 750.0,
            velocity_threshold_ms: 40.0,
        };

        let request = raw.validate(&defaults).unwrap();
        assert_eq!(request.distance_threshold_m(), 750.0);
        assert_eq!(request.velocity_threshold_ms(), 20.0);
    }

    #[test]
    fn deserializing_request_validates_elements() {
        let result = serde_json::from_value::<HazardAssessmentRequest>(json!({
            "returns": [{
                "timestamp": "2024-03-26T00:00:00Z",
                "distance_m": 10,
                "radial_velocity_ms": 0,
                "intensity_dbz": 95
            }]
        }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("intensity_dbz"), "{message}");
    }

    #[test]
    fn defaults_must_be_positive() {
        assert!(RequestDefaults::default().validate().is_ok());
        let bad = RequestDefaults {
            distance_threshold_m: 0.0,
            ..Default::default()
        };
        assert_eq!(bad.validate().unwrap_err().kind(), "out_of_range");
    }
}
