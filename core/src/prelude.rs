use crate::models::{HazardAssessmentRequest, HazardAssessmentResponse};

/// Rejection raised while constructing a data-model value.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
    #[error("malformed timestamp {value:?}: expected ISO-8601")]
    MalformedTimestamp { value: String },
    #[error("{field} must be a radar return record, got {shape}")]
    InvalidElementType { field: String, shape: String },
    #[error("{field} must contain at least one element")]
    EmptyCollection { field: &'static str },
}

impl ValidationError {
    pub(crate) fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    /// Stable identifier of the rejection reason, used in client-facing payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "out_of_range",
            Self::MalformedTimestamp { .. } => "malformed_timestamp",
            Self::InvalidElementType { .. } => "invalid_element_type",
            Self::EmptyCollection { .. } => "empty_collection",
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Entry point the transport layer calls through.
///
/// Implementations are total over validated requests: every rejection has
/// already happened while the request was built.
pub trait Assess: Send + Sync {
    fn assess(&self, request: &HazardAssessmentRequest) -> HazardAssessmentResponse;
}
