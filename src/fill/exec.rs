use super::{apply_plan, output, plan_window, PlanOptions};
use crate::cli::{CommonArgs, FillArgs};
use crate::git::{GitCli, GitRepo};
use crate::util::{now_local, resolve_window};
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

pub fn exec(common: CommonArgs, args: FillArgs) -> anyhow::Result<()> {
    let options = PlanOptions {
        probability: args.probability,
        min_commits: args.min_commits,
        max_commits: args.max_commits,
    };
    options.validate().context("Invalid fill options")?;

    let window = resolve_window(
        args.window.days,
        args.window.since.as_deref(),
        args.window.until.as_deref(),
        now_local(),
    )
    .context("Failed to resolve date range")?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let plan = plan_window(&window, &options, &mut rng);
    info!(
        start = %plan.start,
        end = %plan.end,
        days = plan.days.len(),
        commits = plan.total_commits(),
        "plan ready"
    );

    if args.dry_run {
        if args.json {
            output::output_json(&plan, None, true, args.seed)?;
        } else if args.ndjson {
            output::output_plan_ndjson(&plan)?;
        } else {
            output::output_plan_text(&plan);
        }
        return Ok(());
    }

    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let mut git = GitCli::new(repo.path());

    let pb = if args.json || args.ndjson {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(u64::from(plan.total_commits()))
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.green/white} {pos}/{len} commits")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let result = apply_plan(&plan, &args.message, &mut git, |record| {
        if args.ndjson {
            match output::commit_ndjson(record) {
                Ok(line) => pb.suspend(|| println!("{line}")),
                Err(e) => warn!(error = %e, "failed to serialize commit record"),
            }
        } else if !args.json {
            pb.suspend(|| println!("{}", output::commit_line(record)));
        }
        pb.inc(1);
    });
    pb.finish_and_clear();

    let made = result.with_context(|| format!("Failed to commit in {}", repo.path().display()))?;
    info!(commits = made, "fill complete");

    if args.json {
        output::output_json(
            &plan,
            Some(repo.path().to_string_lossy().to_string()),
            false,
            args.seed,
        )?;
    } else if !args.ndjson {
        output::output_summary(&plan, made, false);
    }

    Ok(())
}
