pub mod level;
pub mod radar_return;
pub mod request;
pub mod response;
pub mod timestamp;

pub use level::HazardLevel;
pub use radar_return::{
    coerce_return, RadarReturn, RawRadarReturn, ReturnInput, MAX_INTENSITY_DBZ, MIN_INTENSITY_DBZ,
};
pub use request::{
    HazardAssessmentRequest, RawAssessmentRequest, RequestDefaults, DEFAULT_DISTANCE_THRESHOLD_M,
    DEFAULT_VELOCITY_THRESHOLD_MS,
};
pub use response::{HazardAssessmentResponse, RawAssessmentResponse};
pub use timestamp::{parse_timestamp, TimestampInput};
