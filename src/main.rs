use anyhow::Result;
use clap::Parser;
use heatfill::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
