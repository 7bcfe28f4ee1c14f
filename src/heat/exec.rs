use super::{daily_buckets, output_calendar, output_json, output_ndjson};
use crate::cli::{CommonArgs, HeatArgs};
use crate::git::GitRepo;
use crate::util::{now_local, resolve_window};
use anyhow::Context;
use tracing::info;

pub fn exec(common: CommonArgs, args: HeatArgs) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;

    let window = resolve_window(
        args.window.days,
        args.window.since.as_deref(),
        args.window.until.as_deref(),
        now_local(),
    )
    .context("Failed to resolve date range")?;

    // Keep stdout clean for machine-readable output
    let show_progress = !(args.json || args.ndjson);
    let commit_days = repo
        .commit_days(show_progress)
        .context("Failed to walk repository history")?;

    let (start, end) = (window.start_date(), window.end_date());
    let buckets = daily_buckets(&commit_days, start, end);
    info!(start = %start, end = %end, commits = commit_days.len(), "history aggregated");

    if args.json {
        output_json(&buckets, repo.path(), start, end)?;
    } else if args.ndjson {
        output_ndjson(&buckets)?;
    } else {
        output_calendar(&buckets, start, end);
    }

    Ok(())
}
