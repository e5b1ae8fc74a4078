//! Applies one selected metric across a sequence of content pairs.

use crate::model::{ContentPair, MetricResult, Report};
use crate::select::SelectedMetric;

/// Callback invoked once per evaluated pair, in input order.
pub trait EvaluationObserver {
    fn pair_evaluated(&mut self, result: &MetricResult);
}

impl<F> EvaluationObserver for F
where
    F: FnMut(&MetricResult),
{
    fn pair_evaluated(&mut self, result: &MetricResult) {
        self(result)
    }
}

pub struct NoopObserver;

impl EvaluationObserver for NoopObserver {
    fn pair_evaluated(&mut self, _result: &MetricResult) {}
}

#[derive(Clone, Copy, Debug)]
pub struct PairEvaluator {
    metric: SelectedMetric,
}

impl PairEvaluator {
    pub fn new(metric: SelectedMetric) -> Self {
        Self { metric }
    }

    pub fn evaluate(&self, pair: &ContentPair) -> MetricResult {
        MetricResult {
            identifier: pair.identifier.clone(),
            value: self.metric.apply(&pair.content_a, &pair.content_b),
        }
    }
}

pub struct ReportAggregator<'o> {
    evaluator: PairEvaluator,
    metric: SelectedMetric,
    observer: Option<&'o mut dyn EvaluationObserver>,
}

impl<'o> ReportAggregator<'o> {
    pub fn new(metric: SelectedMetric) -> Self {
        Self {
            evaluator: PairEvaluator::new(metric),
            metric,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: &'o mut dyn EvaluationObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Evaluates every pair in order. Duplicate identifiers are kept and
    /// evaluated independently; an empty input yields an empty report with a
    /// zero total.
    pub fn run<'p, I>(mut self, pairs: I) -> Report
    where
        I: IntoIterator<Item = &'p ContentPair>,
    {
        let mut report = Report::empty(self.metric.kind());
        for pair in pairs {
            let result = self.evaluator.evaluate(pair);
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.pair_evaluated(&result);
            }
            report.push(result);
        }
        report
    }
}

pub fn aggregate<'p, I>(metric: SelectedMetric, pairs: I) -> Report
where
    I: IntoIterator<Item = &'p ContentPair>,
{
    ReportAggregator::new(metric).run(pairs)
}

#[cfg(test)]
#[path = "tests/evaluate_tests.rs"]
mod tests;
