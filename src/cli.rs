use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "heatfill")]
#[command(about = "Backfill a contribution heatmap with empty commits, and patch readTime entries")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug)")]
    pub verbose: u8,
}

#[derive(Args, Clone, Debug)]
pub struct WindowArgs {
    #[arg(long, conflicts_with = "since", help = "Number of days back from the end of the window [default: 90]")]
    pub days: Option<u32>,

    #[arg(long, help = "Start of the window (RFC3339, YYYY-MM-DD, 'N days ago', or a duration like 12weeks)")]
    pub since: Option<String>,

    #[arg(long, help = "End of the window (same formats as --since) [default: now]")]
    pub until: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct FillArgs {
    #[clap(flatten)]
    pub window: WindowArgs,

    #[arg(long, default_value_t = 0.6, help = "Chance that a day receives commits")]
    pub probability: f64,

    #[arg(long = "min", default_value_t = 1, help = "Fewest commits on an active day")]
    pub min_commits: u32,

    #[arg(long = "max", default_value_t = 5, help = "Most commits on an active day")]
    pub max_commits: u32,

    #[arg(short, long, default_value = "update heatmap", help = "Commit message")]
    pub message: String,

    #[arg(long, help = "Seed for a reproducible plan")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print the plan without committing")]
    pub dry_run: bool,

    #[arg(long, conflicts_with = "ndjson", help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,
}

#[derive(Args, Clone, Debug)]
pub struct InsertUrlArgs {
    #[arg(help = "File to rewrite", default_value = crate::rewrite::DEFAULT_TARGET)]
    pub path: PathBuf,

    #[arg(long, help = "Leave entries already followed by a url field alone")]
    pub skip_existing: bool,

    #[arg(long, help = "Report what would change without writing")]
    pub dry_run: bool,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct HeatArgs {
    #[clap(flatten)]
    pub window: WindowArgs,

    #[arg(long, conflicts_with = "ndjson", help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create backdated empty commits across a window of days
    Fill(FillArgs),
    /// Insert `url: '#',` after every `readTime: '...',` in a file
    InsertUrl(InsertUrlArgs),
    /// Show per-day commit activity of the repository
    Heat(HeatArgs),
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.common.verbose);

        match self.command {
            Commands::Fill(args) => crate::fill::exec(self.common, args),
            Commands::InsertUrl(args) => crate::rewrite::exec(args),
            Commands::Heat(args) => crate::heat::exec(self.common, args),
        }
    }
}
