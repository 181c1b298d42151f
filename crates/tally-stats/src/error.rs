//! Error types for the stats crate.

/// Errors that can occur while configuring data processing.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StatsError {
    /// Filter thresholds that no value could satisfy, or that are NaN.
    #[error("invalid filter bounds: min {min}, max {max:?}")]
    InvalidBounds { min: f64, max: Option<f64> },
}

/// Convenience alias for stats results.
pub type StatsResult<T> = Result<T, StatsError>;
