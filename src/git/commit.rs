//! Creating backdated empty commits.
//!
//! Commits go through the `git` executable so that hooks, signing and the
//! user's identity configuration all apply exactly as they would by hand.

use crate::error::{HeatfillError, Result};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, instrument};

pub const AUTHOR_DATE_VAR: &str = "GIT_AUTHOR_DATE";
pub const COMMITTER_DATE_VAR: &str = "GIT_COMMITTER_DATE";

/// Something that can record one empty commit at a given timestamp.
pub trait Committer {
    fn commit_empty(&mut self, timestamp: &str, message: &str) -> Result<()>;
}

/// Runs `git commit --allow-empty` in a work tree.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: OsString::from("git"),
            workdir: workdir.into(),
        }
    }

    /// Use a different executable instead of `git` from `PATH`.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, timestamp: &str, message: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(commit_args(timestamp, message))
            .current_dir(&self.workdir)
            .env(AUTHOR_DATE_VAR, timestamp)
            .env(COMMITTER_DATE_VAR, timestamp);
        cmd
    }
}

impl Committer for GitCli {
    #[instrument(skip(self, message))]
    fn commit_empty(&mut self, timestamp: &str, message: &str) -> Result<()> {
        let output = self.command(timestamp, message).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                HeatfillError::GitUnavailable(e)
            } else {
                HeatfillError::Io(e)
            }
        })?;

        if !output.status.success() {
            return Err(HeatfillError::CommitFailed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!(stdout = %String::from_utf8_lossy(&output.stdout).trim(), "commit created");
        Ok(())
    }
}

pub fn commit_args(timestamp: &str, message: &str) -> Vec<String> {
    vec![
        "commit".to_string(),
        "--allow-empty".to_string(),
        "-m".to_string(),
        message.to_string(),
        "--date".to_string(),
        timestamp.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn commit_args_carry_message_and_date() {
        assert_eq!(
            commit_args("2024-05-01T10:00:00", "update heatmap"),
            vec!["commit", "--allow-empty", "-m", "update heatmap", "--date", "2024-05-01T10:00:00"]
        );
    }

    #[test]
    fn command_sets_both_date_variables() {
        let cli = GitCli::new("/tmp");
        let cmd = cli.command("2024-05-01T10:00:00", "msg");
        let envs: Vec<_> = cmd
            .get_envs()
            .map(|(k, v)| (k.to_string_lossy().to_string(), v.map(|v| v.to_string_lossy().to_string())))
            .collect();
        assert!(envs.contains(&(AUTHOR_DATE_VAR.to_string(), Some("2024-05-01T10:00:00".to_string()))));
        assert!(envs.contains(&(COMMITTER_DATE_VAR.to_string(), Some("2024-05-01T10:00:00".to_string()))));
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/tmp")));
    }

    #[test]
    fn missing_executable_reports_git_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut cli = GitCli::new(dir.path()).with_program("heatfill-no-such-git-binary");
        let err = cli.commit_empty("2024-05-01T10:00:00", "msg").unwrap_err();
        assert!(matches!(err, HeatfillError::GitUnavailable(_)));
    }
}
