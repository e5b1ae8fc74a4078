use std::path::PathBuf;

use clap::Args;

use revdist::metrics::MetricKind;

/// Metric selection. Every flag and `--metric` value counts as one request;
/// more than one request is rejected.
#[derive(Args, Debug, Default)]
pub(crate) struct MetricArgs {
    /// Levenshtein edit distance (default)
    #[arg(long)]
    pub(crate) levenshtein: bool,
    /// Hamming distance, shorter side padded with spaces
    #[arg(long)]
    pub(crate) hamming: bool,
    /// Characters added (target length minus base length)
    #[arg(long)]
    pub(crate) additions: bool,
    /// Damerau-Levenshtein distance (adjacent swaps count once)
    #[arg(long)]
    pub(crate) damerau_levenshtein: bool,
    /// Jaro-Winkler distance
    #[arg(long)]
    pub(crate) jaro_winkler: bool,
    /// Longest-common-subsequence distance
    #[arg(long)]
    pub(crate) lcs: bool,
    /// Change in line count
    #[arg(long)]
    pub(crate) line_diff: bool,
    /// Change in word count
    #[arg(long)]
    pub(crate) word_diff: bool,
    /// Metric by name (see `revdist metrics`)
    #[arg(long = "metric", value_name = "NAME")]
    pub(crate) metric: Vec<String>,
}

impl MetricArgs {
    pub(crate) fn requested(&self) -> Vec<String> {
        let flags = [
            (self.levenshtein, MetricKind::Levenshtein),
            (self.hamming, MetricKind::Hamming),
            (self.additions, MetricKind::Additions),
            (self.damerau_levenshtein, MetricKind::DamerauLevenshtein),
            (self.jaro_winkler, MetricKind::JaroWinkler),
            (self.lcs, MetricKind::Lcs),
            (self.line_diff, MetricKind::LineDiff),
            (self.word_diff, MetricKind::WordDiff),
        ];
        let mut out: Vec<String> = flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, kind)| kind.canonical_name().to_string())
            .collect();
        out.extend(self.metric.iter().cloned());
        out
    }
}

#[derive(Args)]
pub(crate) struct ReportArgs {
    /// Base revision
    #[arg(default_value = "HEAD")]
    pub(crate) from: String,
    /// Target revision (defaults to the working tree)
    pub(crate) to: Option<String>,
    #[command(flatten)]
    pub(crate) selection: MetricArgs,
    /// Show one row per file
    #[arg(long)]
    pub(crate) per_file: bool,
    /// Only report paths matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub(crate) include: Vec<String>,
    /// Skip paths matching this glob (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub(crate) exclude: Vec<String>,
    /// Repository to inspect (defaults to current directory)
    #[arg(long)]
    pub(crate) repo: Option<PathBuf>,
    /// Config file (defaults to revdist.json at the repository root)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CompareArgs {
    /// Base file (a missing file reads as empty)
    pub(crate) a: PathBuf,
    /// Target file (a missing file reads as empty)
    pub(crate) b: PathBuf,
    #[command(flatten)]
    pub(crate) selection: MetricArgs,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct MetricsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[cfg(test)]
#[path = "../tests/cli_commands/report_tests.rs"]
mod tests;
