use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Numeric output of a metric.
///
/// Every metric except Jaro-Winkler yields an integer count; Jaro-Winkler
/// yields a ratio in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    Ratio(f64),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Ratio(r) => r,
        }
    }
}

impl Add for MetricValue {
    type Output = MetricValue;

    fn add(self, rhs: MetricValue) -> MetricValue {
        match (self, rhs) {
            (MetricValue::Count(a), MetricValue::Count(b)) => MetricValue::Count(a + b),
            (a, b) => MetricValue::Ratio(a.as_f64() + b.as_f64()),
        }
    }
}

impl AddAssign for MetricValue {
    fn add_assign(&mut self, rhs: MetricValue) {
        *self = *self + rhs;
    }
}

impl From<usize> for MetricValue {
    fn from(n: usize) -> Self {
        MetricValue::Count(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        MetricValue::Count(n)
    }
}

impl From<f64> for MetricValue {
    fn from(r: f64) -> Self {
        MetricValue::Ratio(r)
    }
}
