pub mod config;
pub mod scorer;

pub use config::{LevelThresholds, ScorerConfig, ScoringWeights};
pub use scorer::{HazardScorer, ReturnScore};
