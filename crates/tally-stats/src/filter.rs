//! Inclusive range filtering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StatsError, StatsResult};

/// Inclusive thresholds for [`filter_data`].
///
/// The default keeps every non-negative value: `min 0.0`, no upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct FilterBounds {
    pub min: f64,
    pub max: Option<f64>,
}

impl FilterBounds {
    /// Build bounds, rejecting NaN thresholds and `min > max`.
    pub fn new(min: f64, max: Option<f64>) -> StatsResult<Self> {
        let valid = !min.is_nan()
            && match max {
                Some(max) => !max.is_nan() && min <= max,
                None => true,
            };
        if !valid {
            return Err(StatsError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

/// Unchecked wire form; goes through [`FilterBounds::new`] on deserialize.
#[derive(Deserialize)]
struct RawBounds {
    min: f64,
    max: Option<f64>,
}

impl TryFrom<RawBounds> for FilterBounds {
    type Error = StatsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self { min: 0.0, max: None }
    }
}

/// Keep the values of `data` within `bounds`, in input order.
///
/// ```
/// use tally_stats::{filter_data, FilterBounds};
///
/// let data = [-1.0, 0.0, 5.0, 12.0];
/// assert_eq!(filter_data(&data, FilterBounds::default()), vec![0.0, 5.0, 12.0]);
///
/// let bounds = FilterBounds::new(1.0, Some(10.0)).unwrap();
/// assert_eq!(filter_data(&data, bounds), vec![5.0]);
/// ```
pub fn filter_data(data: &[f64], bounds: FilterBounds) -> Vec<f64> {
    let kept: Vec<f64> = data.iter().copied().filter(|v| bounds.contains(*v)).collect();
    debug!(
        input = data.len(),
        kept = kept.len(),
        min = bounds.min,
        max = ?bounds.max,
        "data filtered"
    );
    kept
}
