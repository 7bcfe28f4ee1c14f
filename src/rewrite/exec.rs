use super::UrlInserter;
use crate::cli::InsertUrlArgs;
use crate::error::{HeatfillError, Result};
use crate::model::InsertOutcome;
use anyhow::Context;
use console::style;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

pub fn exec(args: InsertUrlArgs) -> anyhow::Result<()> {
    let outcome = rewrite_file(&args.path, args.skip_existing, args.dry_run)
        .with_context(|| format!("Failed to rewrite {}", args.path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.written {
        println!("Updated file successfully");
    } else {
        println!(
            "{} {} url field(s) would be inserted into {}",
            style("Dry run:").bold(),
            style(outcome.replacements).green(),
            outcome.path
        );
    }

    Ok(())
}

/// Read `path`, insert the url fields, and write it back unless `dry_run`.
///
/// The file is rewritten even when nothing matched. A missing file is an
/// error and is never created.
pub fn rewrite_file(path: &Path, skip_existing: bool, dry_run: bool) -> Result<InsertOutcome> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HeatfillError::NotFound(path.to_path_buf()),
        _ => HeatfillError::Io(e),
    })?;

    let rewrite = UrlInserter::new()?.apply(&content, skip_existing);
    if rewrite.replacements == 0 {
        warn!(path = %path.display(), "no readTime entries needed a url field");
    }

    if !dry_run {
        fs::write(path, &rewrite.content)?;
        info!(path = %path.display(), replacements = rewrite.replacements, "file rewritten");
    }

    Ok(InsertOutcome {
        path: path.display().to_string(),
        replacements: rewrite.replacements,
        skipped: rewrite.skipped,
        written: !dry_run,
    })
}
