use revdist::metrics::MetricKind;

use super::*;

pub(super) fn handle_metrics_command(json: bool) -> Result<()> {
    if json {
        let entries: Vec<serde_json::Value> = MetricKind::ALL
            .iter()
            .map(|k| {
                serde_json::json!({
                    "name": k.canonical_name(),
                    "sign": k.sign().as_str(),
                    "description": k.description(),
                    "default": *k == MetricKind::DEFAULT,
                })
            })
            .collect();
        return print_json(&entries, "metrics");
    }

    let width = MetricKind::ALL
        .iter()
        .map(|k| k.canonical_name().len())
        .max()
        .unwrap_or(0);
    for k in MetricKind::ALL {
        let marker = if k == MetricKind::DEFAULT { " (default)" } else { "" };
        println!(
            "{:<width$}  {:<6}  {}{}",
            k.canonical_name(),
            k.sign().as_str(),
            k.description(),
            marker,
            width = width
        );
    }
    Ok(())
}
