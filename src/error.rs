use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatfillError>;

#[derive(Error, Debug)]
pub enum HeatfillError {
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("git executable not available: {0}")]
    GitUnavailable(std::io::Error),
    #[error("git commit failed ({}): {stderr}", describe_status(.status))]
    CommitFailed { status: Option<i32>, stderr: String },
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Object find error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

// gix errors are large; keep the enum small by boxing them
impl From<gix::object::find::existing::with_conversion::Error> for HeatfillError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        HeatfillError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for HeatfillError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        HeatfillError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for HeatfillError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        HeatfillError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for HeatfillError {
    fn from(err: gix::object::commit::Error) -> Self {
        HeatfillError::Commit(Box::new(err))
    }
}

impl From<gix::discover::Error> for HeatfillError {
    fn from(err: gix::discover::Error) -> Self {
        HeatfillError::GitDiscover(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_failure_message_includes_exit_code() {
        let err = HeatfillError::CommitFailed {
            status: Some(128),
            stderr: "fatal: not a git repository".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "git commit failed (exit code 128): fatal: not a git repository"
        );
    }

    #[test]
    fn commit_failure_without_code_mentions_signal() {
        let err = HeatfillError::CommitFailed { status: None, stderr: String::new() };
        assert!(err.to_string().contains("terminated by signal"));
    }
}
