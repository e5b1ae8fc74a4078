use serde::Serialize;

use crate::metrics::MetricKind;

use super::MetricValue;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricResult {
    pub identifier: String,
    pub value: MetricValue,
}

/// Per-item results in input order, plus their sum.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub metric: MetricKind,
    pub rows: Vec<MetricResult>,
    pub total: MetricValue,
}

impl Report {
    pub fn empty(metric: MetricKind) -> Self {
        Self {
            metric,
            rows: Vec::new(),
            total: metric.zero(),
        }
    }

    pub fn push(&mut self, result: MetricResult) {
        self.total += result.value;
        self.rows.push(result);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
