use revdist::metrics::{MetricKind, MetricSign};
use revdist::model::{MetricValue, Report};

const TOTAL_LABEL: &str = "total";

pub(super) fn format_value(metric: MetricKind, value: MetricValue) -> String {
    match value {
        MetricValue::Ratio(r) => format!("{:.4}", r),
        MetricValue::Count(n) if n > 0 && metric.sign() == MetricSign::Signed => {
            format!("+{}", n)
        }
        MetricValue::Count(n) => n.to_string(),
    }
}

/// `<metric>: <total>`
pub(super) fn render_total(report: &Report) -> String {
    format!(
        "{}: {}",
        report.metric.canonical_name(),
        format_value(report.metric, report.total)
    )
}

/// One aligned row per file followed by the total.
pub(super) fn render_table(report: &Report) -> Vec<String> {
    let values: Vec<String> = report
        .rows
        .iter()
        .map(|r| format_value(report.metric, r.value))
        .collect();
    let total = format_value(report.metric, report.total);

    let id_width = report
        .rows
        .iter()
        .map(|r| r.identifier.chars().count())
        .chain([TOTAL_LABEL.len()])
        .max()
        .unwrap_or(0);
    let value_width = values
        .iter()
        .map(|v| v.len())
        .chain([total.len()])
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(report.rows.len() + 2);
    if report.rows.is_empty() {
        lines.push("(no changed files)".to_string());
    }
    for (row, value) in report.rows.iter().zip(&values) {
        lines.push(format!(
            "{:<id_width$}  {:>value_width$}",
            row.identifier,
            value,
            id_width = id_width,
            value_width = value_width
        ));
    }
    lines.push(format!(
        "{:<id_width$}  {:>value_width$}",
        TOTAL_LABEL,
        total,
        id_width = id_width,
        value_width = value_width
    ));
    lines
}

#[cfg(test)]
#[path = "../tests/cli_exec/render_tests.rs"]
mod tests;
