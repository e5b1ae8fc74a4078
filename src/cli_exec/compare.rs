use revdist::evaluate::aggregate;
use revdist::git::read_or_empty;
use revdist::model::ContentPair;
use revdist::select::select_metric;

use crate::cli_commands::report::CompareArgs;

use super::render::render_total;
use super::*;

pub(super) fn handle_compare_command(args: CompareArgs) -> Result<()> {
    let metric = select_metric(&args.selection.requested())?;

    let pair = ContentPair::new(
        format!("{} -> {}", args.a.display(), args.b.display()),
        read_or_empty(&args.a)?,
        read_or_empty(&args.b)?,
    );
    let report = aggregate(metric, [&pair]);

    if args.json {
        return print_json(&report, "compare");
    }
    println!("{}", render_total(&report));
    Ok(())
}
