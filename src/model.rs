use crate::error::{HeatfillError, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Format handed to `git commit --date` and the `GIT_*_DATE` variables.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Inclusive span of local time walked one calendar day at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Window {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Window of `days` days ending at `end`; visits `days + 1` calendar days.
    pub fn days_back(end: NaiveDateTime, days: u32) -> Result<Self> {
        let start = Duration::try_days(i64::from(days))
            .and_then(|span| end.checked_sub_signed(span))
            .ok_or_else(|| HeatfillError::InvalidDate(format!("{days} days before {end} is out of range")))?;
        Ok(Self { start, end })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn cursor(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        std::iter::successors(Some(self.start), |current| current.checked_add_signed(Duration::days(1)))
            .take_while(move |current| current <= &self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub timestamp: NaiveDateTime,
    pub commits: u32,
}

impl DayPlan {
    pub fn timestamp_arg(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPlan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub probability: f64,
    pub min_commits: u32,
    pub max_commits: u32,
    pub days: Vec<DayPlan>,
}

impl FillPlan {
    pub fn total_commits(&self) -> u32 {
        self.days.iter().map(|d| d.commits).sum()
    }

    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|d| d.commits > 0).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub timestamp: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: Option<String>,
    pub dry_run: bool,
    pub seed: Option<u64>,
    pub total_commits: u32,
    pub plan: FillPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatBucket {
    pub day: NaiveDate,
    pub commit_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_commits: u32,
    pub buckets: Vec<HeatBucket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOutcome {
    pub path: String,
    pub replacements: usize,
    pub skipped: usize,
    pub written: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn ninety_day_window_visits_ninety_one_days() {
        let end = at(2024, 6, 30, 14, 5, 9);
        let window = Window::days_back(end, 90).unwrap();
        let days: Vec<_> = window.cursor().collect();
        assert_eq!(days.len(), 91);
        assert_eq!(days.first(), Some(&window.start));
        assert_eq!(days.last(), Some(&end));
    }

    #[test]
    fn cursor_keeps_time_of_day() {
        let window = Window::days_back(at(2024, 3, 2, 9, 30, 0), 3).unwrap();
        assert!(window.cursor().all(|t| t.format("%H:%M:%S").to_string() == "09:30:00"));
    }

    #[test]
    fn huge_day_count_is_rejected() {
        let err = Window::days_back(at(2024, 6, 30, 0, 0, 0), 200_000_000).unwrap_err();
        assert!(matches!(err, HeatfillError::InvalidDate(_)));
    }

    #[test]
    fn cursor_crosses_month_and_leap_day() {
        let window = Window::new(at(2024, 2, 28, 0, 0, 0), at(2024, 3, 1, 0, 0, 0));
        let dates: Vec<_> = window.cursor().map(|t| t.date().to_string()).collect();
        assert_eq!(dates, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn inverted_window_is_empty() {
        let window = Window::new(at(2024, 3, 2, 0, 0, 0), at(2024, 3, 1, 0, 0, 0));
        assert_eq!(window.cursor().count(), 0);
    }

    #[test]
    fn timestamp_arg_has_no_fraction_or_offset() {
        let day = DayPlan {
            date: NaiveDate::from_ymd_opt(2023, 10, 24).unwrap(),
            timestamp: at(2023, 10, 24, 8, 7, 6),
            commits: 2,
        };
        assert_eq!(day.timestamp_arg(), "2023-10-24T08:07:06");
    }
}
