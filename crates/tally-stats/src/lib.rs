//! Numeric data processing for tally.
//!
//! Operates on datasets with possibly missing values (`Option<f64>`).
//!
//! # Key Types
//!
//! - [`DataProcessor`] — Owns a dataset; doubles positives and summarizes
//! - [`Stats`] — Total, count, average, min and max of the present values
//! - [`FilterBounds`] / [`filter_data`] — Inclusive range filtering

pub mod error;
pub mod filter;
pub mod processor;

pub use error::{StatsError, StatsResult};
pub use filter::{filter_data, FilterBounds};
pub use processor::{DataProcessor, Stats};
