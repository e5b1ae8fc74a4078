use std::path::PathBuf;

use revdist::config::{load_repo_config, read_config};
use revdist::evaluate::ReportAggregator;
use revdist::git::{GitRepo, PathFilter, RevRange};
use revdist::model::{MetricResult, RevdistConfig};
use revdist::select::{SelectedMetric, select_metric};

use crate::cli_commands::report::ReportArgs;

use super::render::{render_table, render_total};
use super::*;

pub(super) fn handle_report_command(args: ReportArgs) -> Result<()> {
    let repo = discover_repo(args.repo.as_ref())?;
    let cfg = match &args.config {
        Some(path) => read_config(path)?,
        None => load_repo_config(repo.root())?,
    };

    let metric = resolve_metric(args.selection.requested(), &cfg)?;

    let mut include = cfg.include.clone();
    include.extend(args.include);
    let mut exclude = cfg.exclude.clone();
    exclude.extend(args.exclude);
    let filter = PathFilter::new(&include, &exclude)?;

    let range = RevRange::new(args.from, args.to);
    let pairs = repo.content_pairs(&range, &filter)?;

    let mut log_row = |r: &MetricResult| {
        tracing::debug!(path = %r.identifier, value = ?r.value, "evaluated");
    };
    let report = ReportAggregator::new(metric)
        .with_observer(&mut log_row)
        .run(&pairs);
    tracing::info!(
        metric = metric.canonical_name(),
        files = report.len(),
        "report complete"
    );

    if args.json {
        return print_json(&report, "report");
    }
    if args.per_file || cfg.per_file {
        for line in render_table(&report) {
            println!("{}", line);
        }
    } else {
        println!("{}", render_total(&report));
    }
    Ok(())
}

/// Explicit requests win; the config metric only applies when none were made.
pub(super) fn resolve_metric(requested: Vec<String>, cfg: &RevdistConfig) -> Result<SelectedMetric> {
    let tokens = match (requested.is_empty(), &cfg.metric) {
        (true, Some(name)) => vec![name.clone()],
        _ => requested,
    };
    Ok(select_metric(&tokens)?)
}

fn discover_repo(repo: Option<&PathBuf>) -> Result<GitRepo> {
    let start = match repo {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("get current dir")?,
    };
    GitRepo::discover(&start)
}

#[cfg(test)]
#[path = "../tests/cli_exec/report_tests.rs"]
mod tests;
