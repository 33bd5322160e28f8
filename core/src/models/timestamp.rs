use crate::prelude::{ValidationError, ValidationResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Offset-less layouts, read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Timestamp as supplied by a caller, before parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimestampInput {
    Native(DateTime<FixedOffset>),
    Text(String),
}

impl TimestampInput {
    pub fn resolve(&self) -> ValidationResult<DateTime<FixedOffset>> {
        match self {
            Self::Native(ts) => Ok(*ts),
            Self::Text(text) => parse_timestamp(text),
        }
    }
}

impl From<String> for TimestampInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TimestampInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<DateTime<FixedOffset>> for TimestampInput {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        Self::Native(ts)
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Native(ts.into())
    }
}

impl From<TimestampInput> for String {
    fn from(input: TimestampInput) -> Self {
        match input {
            TimestampInput::Native(ts) => ts.to_rfc3339(),
            TimestampInput::Text(text) => text,
        }
    }
}

/// Writes a timestamp as RFC 3339 with a numeric offset, so UTC reads
/// `+00:00` the same way [`TimestampInput`] does.
pub fn serialize_rfc3339<S: Serializer>(
    ts: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339())
}

/// Parses ISO-8601 text. A trailing `Z` means `+00:00`; values without an
/// offset are taken as UTC.
pub fn parse_timestamp(text: &str) -> ValidationResult<DateTime<FixedOffset>> {
    let trimmed = text.trim();
    let normalized = match trimmed.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => trimmed.to_string(),
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(ts);
    }
    if let Ok(ts) = DateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(ts);
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(Utc.from_utc_datetime(&naive).into());
        }
    }
    if let Some(naive) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Utc.from_utc_datetime(&naive).into());
    }

    Err(ValidationError::MalformedTimestamp {
        value: text.to_string(),
    })
}
