use crate::model::HeatBucket;
use chrono::NaiveDate;
use std::collections::HashMap;

/// One bucket per calendar day in `start..=end`, days without commits included.
pub fn daily_buckets(commit_days: &[NaiveDate], start: NaiveDate, end: NaiveDate) -> Vec<HeatBucket> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for day in commit_days.iter().filter(|d| **d >= start && **d <= end) {
        *counts.entry(*day).or_insert(0) += 1;
    }

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| HeatBucket {
            day,
            commit_count: counts.get(&day).copied().unwrap_or(0),
        })
        .collect()
}

pub fn total_commits(buckets: &[HeatBucket]) -> u32 {
    buckets.iter().map(|b| b.commit_count).sum()
}
