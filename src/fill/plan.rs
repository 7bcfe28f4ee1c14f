use crate::error::{HeatfillError, Result};
use crate::model::{DayPlan, FillPlan, Window};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanOptions {
    /// Chance that a given day receives any commits.
    pub probability: f64,
    pub min_commits: u32,
    pub max_commits: u32,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            probability: 0.6,
            min_commits: 1,
            max_commits: 5,
        }
    }
}

impl PlanOptions {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(HeatfillError::InvalidArgument(format!(
                "probability must be within [0, 1], got {}",
                self.probability
            )));
        }
        if self.min_commits == 0 {
            return Err(HeatfillError::InvalidArgument(
                "minimum commits per active day must be at least 1".to_string(),
            ));
        }
        if self.min_commits > self.max_commits {
            return Err(HeatfillError::InvalidArgument(format!(
                "minimum commits ({}) exceeds maximum ({})",
                self.min_commits, self.max_commits
            )));
        }
        Ok(())
    }
}

/// Decide, day by day, how many commits land on each date of `window`.
pub fn plan_window<R: Rng + ?Sized>(window: &Window, options: &PlanOptions, rng: &mut R) -> FillPlan {
    let days = window
        .cursor()
        .map(|timestamp| {
            let commits = if rng.gen::<f64>() < options.probability {
                rng.gen_range(options.min_commits..=options.max_commits)
            } else {
                0
            };
            DayPlan {
                date: timestamp.date(),
                timestamp,
                commits,
            }
        })
        .collect();

    FillPlan {
        start: window.start,
        end: window.end,
        probability: options.probability,
        min_commits: options.min_commits,
        max_commits: options.max_commits,
        days,
    }
}
