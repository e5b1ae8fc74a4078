//! Resolves the requested metric tokens to exactly one catalogue entry.

use crate::metrics::{MetricFn, MetricKind};
use crate::model::MetricValue;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    #[error("only one metric may be requested at a time (got {})", .requested.join(", "))]
    Ambiguous { requested: Vec<String> },

    #[error("unknown metric `{name}` (expected one of: {})", MetricKind::canonical_names().join(", "))]
    Unknown { name: String },
}

/// The single metric active for one run.
#[derive(Clone, Copy, Debug)]
pub struct SelectedMetric {
    kind: MetricKind,
    function: MetricFn,
}

impl SelectedMetric {
    pub fn new(kind: MetricKind) -> Self {
        Self {
            kind,
            function: kind.function(),
        }
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn canonical_name(&self) -> &'static str {
        self.kind.canonical_name()
    }

    pub fn apply(&self, a: &str, b: &str) -> MetricValue {
        (self.function)(a, b)
    }
}

impl Default for SelectedMetric {
    fn default() -> Self {
        Self::new(MetricKind::DEFAULT)
    }
}

/// Picks the metric for a run from the explicitly requested tokens.
///
/// No tokens selects the default (Levenshtein). More than one token is
/// rejected before any token is parsed.
pub fn select_metric<S: AsRef<str>>(requested: &[S]) -> Result<SelectedMetric, MetricError> {
    match requested {
        [] => Ok(SelectedMetric::default()),
        [one] => {
            let kind: MetricKind = one.as_ref().parse()?;
            Ok(SelectedMetric::new(kind))
        }
        many => Err(MetricError::Ambiguous {
            requested: many.iter().map(|s| s.as_ref().to_string()).collect(),
        }),
    }
}

#[cfg(test)]
#[path = "tests/select_tests.rs"]
mod tests;
