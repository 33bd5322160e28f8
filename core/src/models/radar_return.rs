use crate::models::timestamp::{serialize_rfc3339, TimestampInput};
use crate::prelude::{ValidationError, ValidationResult};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Lowest reflectivity a return may report.
pub const MIN_INTENSITY_DBZ: f64 = -30.0;
/// Highest reflectivity a return may report.
pub const MAX_INTENSITY_DBZ: f64 = 90.0;

/// One validated radar echo.
///
/// Fields are private: the only way to obtain a value is through
/// [`RadarReturn::new`] or deserialization, both of which validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRadarReturn")]
pub struct RadarReturn {
    #[serde(serialize_with = "serialize_rfc3339")]
    timestamp: DateTime<FixedOffset>,
    distance_m: f64,
    radial_velocity_ms: f64,
    intensity_dbz: f64,
}

impl RadarReturn {
    pub fn new(
        timestamp: impl Into<TimestampInput>,
        distance_m: f64,
        radial_velocity_ms: f64,
        intensity_dbz: f64,
    ) -> ValidationResult<Self> {
        let timestamp = timestamp.into().resolve()?;

        if !distance_m.is_finite() || distance_m <= 0.0 {
            return Err(ValidationError::out_of_range(
                "distance_m",
                format!("must be a finite positive number, got {distance_m}"),
            ));
        }
        if !radial_velocity_ms.is_finite() {
            return Err(ValidationError::out_of_range(
                "radial_velocity_ms",
                format!("must be finite, got {radial_velocity_ms}"),
            ));
        }
        if !(MIN_INTENSITY_DBZ..=MAX_INTENSITY_DBZ).contains(&intensity_dbz) {
            return Err(ValidationError::out_of_range(
                "intensity_dbz",
                format!(
                    "must be between {MIN_INTENSITY_DBZ} and {MAX_INTENSITY_DBZ} dBZ, got {intensity_dbz}"
                ),
            ));
        }

        Ok(Self {
            timestamp,
            distance_m,
            radial_velocity_ms,
            intensity_dbz,
        })
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Positive when receding, negative when approaching.
    pub fn radial_velocity_ms(&self) -> f64 {
        self.radial_velocity_ms
    }

    pub fn intensity_dbz(&self) -> f64 {
        self.intensity_dbz
    }
}

/// Field record for a radar return as decoded from the wire. Unknown keys
/// are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRadarReturn {
    pub timestamp: TimestampInput,
    pub distance_m: f64,
    pub radial_velocity_ms: f64,
    pub intensity_dbz: f64,
}

impl TryFrom<RawRadarReturn> for RadarReturn {
    type Error = ValidationError;

    fn try_from(raw: RawRadarReturn) -> ValidationResult<Self> {
        RadarReturn::new(
            raw.timestamp,
            raw.distance_m,
            raw.radial_velocity_ms,
            raw.intensity_dbz,
        )
    }
}

impl From<RadarReturn> for RawRadarReturn {
    fn from(value: RadarReturn) -> Self {
        Self {
            timestamp: TimestampInput::Native(value.timestamp),
            distance_m: value.distance_m,
            radial_velocity_ms: value.radial_velocity_ms,
            intensity_dbz: value.intensity_dbz,
        }
    }
}

/// Anything a caller may place where a radar return is expected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum ReturnInput {
    Validated(RadarReturn),
    Raw(RawRadarReturn),
    Unrecognized(Value),
}

impl From<RadarReturn> for ReturnInput {
    fn from(value: RadarReturn) -> Self {
        Self::Validated(value)
    }
}

impl From<RawRadarReturn> for ReturnInput {
    fn from(raw: RawRadarReturn) -> Self {
        Self::Raw(raw)
    }
}

impl From<Value> for ReturnInput {
    fn from(value: Value) -> Self {
        if value.is_object() {
            if let Ok(raw) = RawRadarReturn::deserialize(&value) {
                return Self::Raw(raw);
            }
        }
        Self::Unrecognized(value)
    }
}

impl Serialize for ReturnInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Validated(value) => value.serialize(serializer),
            Self::Raw(raw) => raw.serialize(serializer),
            Self::Unrecognized(value) => value.serialize(serializer),
        }
    }
}

/// Bridges the raw input stage to the validated domain type.
///
/// `field` names the slot being filled and is echoed back when the input
/// has an unusable shape.
pub fn coerce_return(field: impl Into<String>, input: ReturnInput) -> ValidationResult<RadarReturn> {
    match input {
        ReturnInput::Validated(value) => Ok(value),
        ReturnInput::Raw(raw) => RadarReturn::try_from(raw),
        ReturnInput::Unrecognized(value) => Err(ValidationError::InvalidElementType {
            field: field.into(),
            shape: describe_shape(&value).to_string(),
        }),
    }
}

fn describe_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object with missing, unknown or mistyped fields",
    }
}
