//! Hazard scoring core for the radar hazard service.
//!
//! Radar returns are validated once, at construction, and then scored by a
//! pure function that never fails. Transport concerns live in the
//! `hazard-service` binary.

pub mod models;
pub mod prelude;
pub mod scoring;
pub mod telemetry;

pub use models::{
    HazardAssessmentRequest, HazardAssessmentResponse, HazardLevel, RadarReturn,
    RawAssessmentRequest, RawRadarReturn, RequestDefaults, ReturnInput,
};
pub use prelude::{Assess, ValidationError, ValidationResult};
pub use scoring::{HazardScorer, ReturnScore, ScorerConfig};
