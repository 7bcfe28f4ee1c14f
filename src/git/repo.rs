use crate::error::{HeatfillError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        let repo = discover(&repo_path)?;
        let path = repo
            .workdir()
            .ok_or_else(|| {
                HeatfillError::GitRepo(format!(
                    "{} is a bare repository; commits need a work tree",
                    repo.path().display()
                ))
            })?
            .to_path_buf();

        debug!(path = %path.display(), "opened repository");
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Calendar day of every commit reachable from `HEAD`, in the commit's own
    /// timezone. An unborn `HEAD` yields no days.
    pub fn commit_days(&self, show_progress: bool) -> Result<Vec<NaiveDate>> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            debug!("HEAD is unborn, no history to walk");
            return Ok(Vec::new());
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut days = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = if show_progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Walking history...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let time = commit.time()?;
            days.push(local_day(time.seconds, time.offset)?);

            for pid in commit.parent_ids() {
                stack.push_back(pid.detach());
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        debug!(commits = days.len(), "history walked");
        Ok(days)
    }
}

fn local_day(seconds: i64, offset: i32) -> Result<NaiveDate> {
    let offset = FixedOffset::east_opt(offset)
        .ok_or_else(|| HeatfillError::InvalidDate(format!("Invalid timezone offset: {offset}")))?;
    let utc = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| HeatfillError::InvalidDate(format!("Invalid timestamp: {seconds}")))?;
    Ok(utc.with_timezone(&offset).date_naive())
}
