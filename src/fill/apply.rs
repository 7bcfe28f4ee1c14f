use crate::error::Result;
use crate::git::Committer;
use crate::model::{CommitRecord, FillPlan};
use tracing::debug;

/// Issue every planned commit in date order, stopping at the first failure.
///
/// `on_commit` runs after each successful commit. Commits made before a failure
/// are left in place.
pub fn apply_plan<C, F>(plan: &FillPlan, message: &str, committer: &mut C, mut on_commit: F) -> Result<u32>
where
    C: Committer + ?Sized,
    F: FnMut(&CommitRecord),
{
    let mut made = 0u32;

    for day in plan.days.iter().filter(|d| d.commits > 0) {
        let timestamp = day.timestamp_arg();
        debug!(date = %day.date, commits = day.commits, "filling day");

        for _ in 0..day.commits {
            committer.commit_empty(&timestamp, message)?;
            made += 1;
            on_commit(&CommitRecord {
                timestamp: timestamp.clone(),
                message: message.to_string(),
            });
        }
    }

    Ok(made)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeatfillError;
    use crate::model::DayPlan;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, String)>,
        fail_after: Option<usize>,
    }

    impl Committer for Recorder {
        fn commit_empty(&mut self, timestamp: &str, message: &str) -> Result<()> {
            if self.fail_after == Some(self.calls.len()) {
                return Err(HeatfillError::CommitFailed {
                    status: Some(128),
                    stderr: "fatal: not a git repository".to_string(),
                });
            }
            self.calls.push((timestamp.to_string(), message.to_string()));
            Ok(())
        }
    }

    fn plan(counts: &[u32]) -> FillPlan {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let days: Vec<DayPlan> = counts
            .iter()
            .enumerate()
            .map(|(i, &commits)| {
                let timestamp = first + chrono::Duration::days(i as i64);
                DayPlan { date: timestamp.date(), timestamp, commits }
            })
            .collect();
        FillPlan {
            start: first,
            end: days.last().map(|d| d.timestamp).unwrap_or(first),
            probability: 0.6,
            min_commits: 1,
            max_commits: 5,
            days,
        }
    }

    #[test]
    fn commits_each_planned_day_in_order() {
        let mut recorder = Recorder::default();
        let mut printed = Vec::new();
        let made = apply_plan(&plan(&[2, 0, 1]), "update heatmap", &mut recorder, |r| {
            printed.push(format!("Committed on {}", r.timestamp))
        })
        .unwrap();

        assert_eq!(made, 3);
        assert_eq!(
            recorder.calls,
            vec![
                ("2024-01-01T12:00:00".to_string(), "update heatmap".to_string()),
                ("2024-01-01T12:00:00".to_string(), "update heatmap".to_string()),
                ("2024-01-03T12:00:00".to_string(), "update heatmap".to_string()),
            ]
        );
        assert_eq!(printed.len(), 3);
        assert_eq!(printed[2], "Committed on 2024-01-03T12:00:00");
    }

    #[test]
    fn aborts_on_first_failure_without_rollback() {
        let mut recorder = Recorder { fail_after: Some(2), ..Recorder::default() };
        let mut seen = 0;
        let err = apply_plan(&plan(&[1, 3, 4]), "m", &mut recorder, |_| seen += 1).unwrap_err();

        assert!(matches!(err, HeatfillError::CommitFailed { status: Some(128), .. }));
        assert_eq!(recorder.calls.len(), 2);
        assert_eq!(seen, 2);
    }

    #[test]
    fn empty_plan_makes_no_calls() {
        let mut recorder = Recorder::default();
        assert_eq!(apply_plan(&plan(&[0, 0]), "m", &mut recorder, |_| {}).unwrap(), 0);
        assert!(recorder.calls.is_empty());
    }
}
