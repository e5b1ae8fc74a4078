use clap::Subcommand;

pub(crate) mod report;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Measure every file changed between two revisions (default: HEAD vs working tree)
    Report(report::ReportArgs),

    /// Measure two files on disk
    Compare(report::CompareArgs),

    /// List the available metrics
    Metrics(report::MetricsArgs),
}
