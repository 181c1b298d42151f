use serde::{Deserialize, Serialize};
use tracing::debug;

/// Summary of the present values in a dataset.
///
/// An empty dataset (or one with only missing values) has zero total, count
/// and average, and no min or max.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total: f64,
    pub count: usize,
    pub average: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// A dataset of optional numbers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataProcessor {
    data: Vec<Option<f64>>,
}

impl DataProcessor {
    pub fn new(data: Vec<Option<f64>>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[Option<f64>] {
        &self.data
    }

    /// Iterator over the values that are present.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flatten().copied()
    }

    /// Every positive value, doubled, in input order.
    pub fn process(&self) -> Vec<f64> {
        self.present().filter(|v| *v > 0.0).map(|v| v * 2.0).collect()
    }

    /// Total, count, average, min and max over the present values.
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        for value in self.present() {
            stats.total += value;
            stats.count += 1;
            stats.min = Some(stats.min.map_or(value, |m| m.min(value)));
            stats.max = Some(stats.max.map_or(value, |m| m.max(value)));
        }
        if stats.count > 0 {
            stats.average = stats.total / stats.count as f64;
        }
        debug!(
            count = stats.count,
            missing = self.data.len() - stats.count,
            total = stats.total,
            "stats computed"
        );
        stats
    }
}

impl From<Vec<f64>> for DataProcessor {
    fn from(values: Vec<f64>) -> Self {
        Self {
            data: values.into_iter().map(Some).collect(),
        }
    }
}

impl From<Vec<Option<f64>>> for DataProcessor {
    fn from(data: Vec<Option<f64>>) -> Self {
        Self { data }
    }
}
