use super::catalogue::handle_metrics_command;
use super::compare::handle_compare_command;
use super::report::handle_report_command;
use super::*;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Report(args) => handle_report_command(args)?,
        Commands::Compare(args) => handle_compare_command(args)?,
        Commands::Metrics(args) => handle_metrics_command(args.json)?,
    }
    Ok(())
}
